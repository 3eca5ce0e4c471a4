use fish_supply_db::models::SupplierModel;
use heapless::String as HeaplessString;

pub fn create_test_supplier(supplier_id: &str) -> SupplierModel {
    SupplierModel {
        supplier_id: HeaplessString::try_from(supplier_id).unwrap(),
        name: HeaplessString::try_from("Del Mar Fishing Co.").unwrap(),
        phone: HeaplessString::try_from("0919 222 3344").unwrap(),
        address: HeaplessString::try_from("Bay 7, Navotas Fish Port").unwrap(),
        supplier_type: HeaplessString::try_from("Fisherman").unwrap(),
    }
}
