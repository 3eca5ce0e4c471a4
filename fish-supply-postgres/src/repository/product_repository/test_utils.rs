use fish_supply_db::models::ProductModel;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;

pub fn create_test_product(product_id: &str, quantity: i64, unit_price: i64) -> ProductModel {
    ProductModel {
        product_id: HeaplessString::try_from(product_id).unwrap(),
        name: HeaplessString::try_from("Yellowfin Tuna").unwrap(),
        grade: HeaplessString::try_from("A").unwrap(),
        quantity: Decimal::from(quantity),
        unit_price: Decimal::from(unit_price),
        supplier_id: None,
    }
}
