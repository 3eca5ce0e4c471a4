use fish_supply_db::models::ClientModel;
use heapless::String as HeaplessString;

pub fn create_test_client(client_id: &str) -> ClientModel {
    ClientModel {
        client_id: HeaplessString::try_from(client_id).unwrap(),
        name: HeaplessString::try_from("Harbor Fresh Market").unwrap(),
        contact: HeaplessString::try_from("0917 555 0101").unwrap(),
        address: HeaplessString::try_from("12 Wharf Street").unwrap(),
        category: HeaplessString::try_from("Retail").unwrap(),
    }
}
