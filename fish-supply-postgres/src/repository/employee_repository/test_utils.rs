use fish_supply_db::models::EmployeeModel;
use heapless::String as HeaplessString;

pub fn create_test_employee(employee_id: &str, google_account: Option<&str>) -> EmployeeModel {
    EmployeeModel {
        employee_id: HeaplessString::try_from(employee_id).unwrap(),
        name: HeaplessString::try_from("Maria Santos").unwrap(),
        google_account: google_account.map(|email| HeaplessString::try_from(email).unwrap()),
    }
}
