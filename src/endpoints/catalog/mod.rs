pub mod catalogs;
pub mod connections;
pub mod external_locations;
pub mod metastores;
pub mod schemas;
pub mod storage_credentials;
pub mod tables;
pub mod volumes;
