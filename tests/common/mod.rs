#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use rcgen::{date_time_ymd, BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, KeyPair, KeyUsagePurpose};
use rootcerts::audit::structs::audit_horizons::AuditHorizons;
use rootcerts::config::structs::configuration::Configuration;

pub const ROOT_PEM: &str = include_str!("../fixtures/root_ca.pem");
pub const OTHER_ROOT_PEM: &str = include_str!("../fixtures/other_root_ca.pem");
pub const LEAF_PEM: &str = include_str!("../fixtures/leaf.pem");
pub const FORGED_LEAF_PEM: &str = include_str!("../fixtures/forged_leaf.pem");

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_level = String::from("off");
    config
}

pub fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Reference time inside the validity window of every fixture.
pub fn fixture_horizons() -> AuditHorizons {
    AuditHorizons::new(ymd(2024, 6, 1), ymd(2024, 7, 1), ymd(2024, 9, 1))
}

pub fn create_root(common_name: &str, not_before: (i32, u8, u8), not_after: (i32, u8, u8)) -> String {
    let mut params = CertificateParams::default();
    let mut distinguished_name = DistinguishedName::new();
    distinguished_name.push(DnType::CommonName, common_name);
    distinguished_name.push(DnType::OrganizationName, "Rootcerts Tests");
    params.distinguished_name = distinguished_name;
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![KeyUsagePurpose::KeyCertSign, KeyUsagePurpose::CrlSign];
    params.not_before = date_time_ymd(not_before.0, not_before.1, not_before.2);
    params.not_after = date_time_ymd(not_after.0, not_after.1, not_after.2);
    let key_pair = KeyPair::generate().unwrap();
    params.self_signed(&key_pair).unwrap().pem()
}
