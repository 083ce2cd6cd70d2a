//! PackageStore port

use crate::domain::entities::Package;

use super::StoreError;

pub trait PackageStore: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<Package>, StoreError>;
    fn set(&self, package: &Package) -> Result<(), StoreError>;
    fn all_names(&self) -> Result<Vec<String>, StoreError>;
}
