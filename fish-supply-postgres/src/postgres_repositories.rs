use fish_supply_db::models::{ClientModel, EmployeeModel, ProductModel, SupplierModel, TransactionModel};
use fish_supply_db::sync::ChangeNotifier;
use fish_supply_db::Gateway;
use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::{
    ClientRepositoryImpl, EmployeeRepositoryImpl, ProductRepositoryImpl, SupplierRepositoryImpl,
    TransactionRepositoryImpl,
};

pub type ClientGateway = Gateway<ClientModel, ClientRepositoryImpl>;
pub type SupplierGateway = Gateway<SupplierModel, SupplierRepositoryImpl>;
pub type EmployeeGateway = Gateway<EmployeeModel, EmployeeRepositoryImpl>;
pub type ProductGateway = Gateway<ProductModel, ProductRepositoryImpl>;
pub type TransactionGateway = Gateway<TransactionModel, TransactionRepositoryImpl>;

pub struct PostgresRepositories {
    pool: PgPool,
}

impl PostgresRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create one repository per table, all sharing the pool
    pub fn create_all_repositories(&self) -> Repositories {
        Repositories {
            client_repository: Arc::new(ClientRepositoryImpl::new(self.pool.clone())),
            supplier_repository: Arc::new(SupplierRepositoryImpl::new(self.pool.clone())),
            employee_repository: Arc::new(EmployeeRepositoryImpl::new(self.pool.clone())),
            product_repository: Arc::new(ProductRepositoryImpl::new(self.pool.clone())),
            transaction_repository: Arc::new(TransactionRepositoryImpl::new(self.pool.clone())),
        }
    }

    /// Wrap every repository in a gateway publishing to `notifier`
    pub fn create_gateways(&self, notifier: &ChangeNotifier) -> Gateways {
        let repos = self.create_all_repositories();
        Gateways {
            clients: Gateway::new(repos.client_repository, notifier.clone()),
            suppliers: Gateway::new(repos.supplier_repository, notifier.clone()),
            employees: Gateway::new(repos.employee_repository, notifier.clone()),
            products: Gateway::new(repos.product_repository, notifier.clone()),
            transactions: Gateway::new(repos.transaction_repository, notifier.clone()),
        }
    }
}

pub struct Repositories {
    pub client_repository: Arc<ClientRepositoryImpl>,
    pub supplier_repository: Arc<SupplierRepositoryImpl>,
    pub employee_repository: Arc<EmployeeRepositoryImpl>,
    pub product_repository: Arc<ProductRepositoryImpl>,
    pub transaction_repository: Arc<TransactionRepositoryImpl>,
}

#[derive(Clone)]
pub struct Gateways {
    pub clients: ClientGateway,
    pub suppliers: SupplierGateway,
    pub employees: EmployeeGateway,
    pub products: ProductGateway,
    pub transactions: TransactionGateway,
}
