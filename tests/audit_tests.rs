mod common;

use proptest::prelude::*;
use rootcerts::audit::audit::{audit, audit_bundle};
use rootcerts::audit::enums::audit_verdict::AuditVerdict;
use rootcerts::audit::structs::audit_horizons::AuditHorizons;
use rootcerts::bundle::enums::bundle_error::BundleError;
use rootcerts::bundle::structs::certificate_bundle::CertificateBundle;
use rootcerts::embedded::mozilla_ca_certificates_pem;
use std::sync::OnceLock;

#[test]
fn test_fixture_roots_pass() {
    let pem = format!("{}{}", common::ROOT_PEM, common::OTHER_ROOT_PEM);
    let report = audit(pem.as_bytes(), &common::fixture_horizons()).unwrap();
    assert!(report.success);
    assert_eq!(report.passed_count(), 2);
    assert_eq!(report.failed_count(), 0);
    let horizon = report.horizon.unwrap();
    assert_eq!(horizon.not_after, common::ymd(2040, 1, 1));
    assert_eq!(horizon.name, "Fixture Other Root CA");
}

#[test]
fn test_leaf_in_bundle_fails_ca_check() {
    let pem = format!("{}{}", common::ROOT_PEM, common::LEAF_PEM);
    let report = audit(pem.as_bytes(), &common::fixture_horizons()).unwrap();
    assert!(!report.success);
    assert_eq!(report.certificates[0].verdicts, vec![AuditVerdict::Pass]);
    assert!(report.certificates[1].has(AuditVerdict::FailNotCa));
    assert_eq!(report.failures().count(), 1);
    let horizon = report.horizon.unwrap();
    assert_eq!(horizon.name, "fixture.example");
    assert_eq!(horizon.not_after, common::ymd(2039, 1, 1));
}

#[test]
fn test_horizon_past_every_expiry() {
    let pem = format!("{}{}", common::ROOT_PEM, common::OTHER_ROOT_PEM);
    let horizons = AuditHorizons::new(common::ymd(2024, 6, 1), common::ymd(2041, 1, 1), common::ymd(2042, 1, 1));
    let report = audit(pem.as_bytes(), &horizons).unwrap();
    assert!(!report.success);
    assert!(report.certificates.iter().all(|certificate| certificate.has(AuditVerdict::FailExpired)));
}

#[test]
fn test_corrupt_block_aborts_audit() {
    let pem = format!("{}-----BEGIN CERTIFICATE-----\nMAMCAQE=\n-----END CERTIFICATE-----\n", common::ROOT_PEM);
    match audit(pem.as_bytes(), &common::fixture_horizons()) {
        Err(BundleError::CorruptCertificate { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected a corrupt certificate error, got {:?}", other),
    }
}

#[test]
fn test_empty_bundle_succeeds_without_horizon() {
    let report = audit(b"", &common::fixture_horizons()).unwrap();
    assert!(report.success);
    assert!(report.certificates.is_empty());
    assert!(report.horizon.is_none());
}

#[test]
fn test_report_serializes_to_json() {
    let pem = format!("{}{}", common::ROOT_PEM, common::LEAF_PEM);
    let report = audit(pem.as_bytes(), &common::fixture_horizons()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], serde_json::Value::Bool(false));
    assert_eq!(json["certificates"].as_array().unwrap().len(), 2);
    assert_eq!(json["horizon"]["name"], "fixture.example");
}

#[test]
fn test_embedded_bundle_stays_valid() {
    let bundle = CertificateBundle::from_pem(mozilla_ca_certificates_pem().as_bytes()).unwrap();
    assert!(bundle.len() > 100);
    assert_eq!(bundle.skipped_blocks(), 0);

    let horizons = AuditHorizons::from_months(chrono::Utc::now(), 1, 3).unwrap();
    let report = audit_bundle(&bundle, &horizons);
    assert_eq!(report.certificates.len(), bundle.len());
    assert!(report.horizon.is_some());
    let failures: Vec<String> = report
        .failures()
        .map(|certificate| format!("{} {:?} (notAfter {})", certificate.name, certificate.verdicts, certificate.not_after))
        .collect();
    assert!(report.success, "embedded bundle must stay valid for a month, refresh data/cacert.pem: {:?}", failures);
}

fn shuffled_roots() -> &'static Vec<String> {
    static ROOTS: OnceLock<Vec<String>> = OnceLock::new();
    ROOTS.get_or_init(|| vec![
        common::create_root("Root A", (2020, 1, 1), (2035, 1, 1)),
        common::create_root("Root B", (2020, 1, 1), (2031, 1, 1)),
        common::create_root("Root C", (2020, 1, 1), (2031, 1, 1)),
        common::create_root("Root D", (2020, 1, 1), (2038, 1, 1)),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_horizon_ignores_bundle_order(order in Just(vec![0usize, 1, 2, 3]).prop_shuffle()) {
        let roots = shuffled_roots();
        let pem: String = order.iter().map(|&index| roots[index].as_str()).collect();
        let horizons = AuditHorizons::new(common::ymd(2024, 6, 1), common::ymd(2030, 1, 1), common::ymd(2032, 1, 1));

        let first = audit(pem.as_bytes(), &horizons).unwrap();
        let second = audit(pem.as_bytes(), &horizons).unwrap();
        prop_assert!(first.success);
        prop_assert_eq!(first.warnings_count(), 2);
        let horizon = first.horizon.clone().unwrap();
        prop_assert_eq!(horizon.name.as_str(), "Root B");
        prop_assert_eq!(horizon.not_after, common::ymd(2031, 1, 1));
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_bundle_file_audit() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let bundle_path = temp_dir.path().join("bundle.pem");
    std::fs::write(&bundle_path, format!("{}{}", common::ROOT_PEM, common::OTHER_ROOT_PEM)).unwrap();

    let bundle = CertificateBundle::from_file(bundle_path.to_str().unwrap()).unwrap();
    assert_eq!(bundle.len(), 2);
    let report = audit_bundle(&bundle, &common::fixture_horizons());
    assert!(report.success);
    assert_eq!(report.skipped_blocks, 0);
}
