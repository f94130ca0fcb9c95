#[cfg(test)]
mod pool_tests {
    use chrono::{DateTime, TimeZone, Utc};
    use crate::bundle::structs::certificate_bundle::CertificateBundle;
    use crate::bundle::structs::certificate_record::CertificateRecord;
    use crate::pool::enums::verify_error::VerifyError;
    use crate::pool::structs::certificate_pool::CertificatePool;

    const ROOT_PEM: &str = include_str!("../../tests/fixtures/root_ca.pem");
    const OTHER_ROOT_PEM: &str = include_str!("../../tests/fixtures/other_root_ca.pem");
    const LEAF_PEM: &str = include_str!("../../tests/fixtures/leaf.pem");
    const FORGED_LEAF_PEM: &str = include_str!("../../tests/fixtures/forged_leaf.pem");

    fn record(pem: &str) -> CertificateRecord {
        CertificateBundle::from_pem(pem.as_bytes()).unwrap().into_records().remove(0)
    }

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_pool_deduplicates() {
        let root = record(ROOT_PEM);
        let mut pool = CertificatePool::new();
        assert!(pool.add(root.clone()));
        assert!(!pool.add(root.clone()));
        assert_eq!(pool.len(), 1);
        assert!(pool.contains(&root));
    }

    #[test]
    fn test_member_is_anchored() {
        let root = record(ROOT_PEM);
        let pool = CertificatePool::from_records(&[root.clone()]);
        let chain = pool.verify(&root, at(2030)).unwrap();
        assert_eq!(chain, vec![root]);
    }

    #[test]
    fn test_member_outside_validity() {
        let root = record(ROOT_PEM);
        let pool = CertificatePool::from_records(&[root.clone()]);
        assert!(matches!(pool.verify(&root, at(2019)), Err(VerifyError::NotYetValid { .. })));
        assert!(matches!(pool.verify(&root, at(2041)), Err(VerifyError::Expired { .. })));
    }

    #[test]
    fn test_leaf_chains_to_issuer() {
        let root = record(ROOT_PEM);
        let leaf = record(LEAF_PEM);
        let pool = CertificatePool::from_records(&[root.clone()]);
        let chain = pool.verify(&leaf, at(2030)).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0], leaf);
        assert_eq!(chain[1], root);
    }

    #[test]
    fn test_leaf_unknown_authority() {
        let leaf = record(LEAF_PEM);
        let pool = CertificatePool::from_records(&[record(OTHER_ROOT_PEM)]);
        match pool.verify(&leaf, at(2030)) {
            Err(VerifyError::UnknownAuthority { issuer }) => assert!(issuer.contains("Fixture Root CA")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_forged_signature_rejected() {
        let forged = record(FORGED_LEAF_PEM);
        let pool = CertificatePool::from_records(&[record(ROOT_PEM)]);
        assert!(matches!(pool.verify(&forged, at(2030)), Err(VerifyError::SignatureInvalid { .. })));
    }

    #[test]
    fn test_issuer_must_be_ca() {
        let leaf = record(LEAF_PEM);
        // a pool whose only candidate for the issuer name is not a CA
        let mut not_ca = record(ROOT_PEM);
        not_ca.is_ca = false;
        let pool = CertificatePool::from_records(&[not_ca]);
        assert!(matches!(pool.verify(&leaf, at(2030)), Err(VerifyError::IssuerNotCa { .. })));
    }

    #[test]
    fn test_empty_pool() {
        let pool = CertificatePool::new();
        assert!(pool.is_empty());
        assert!(matches!(pool.verify(&record(ROOT_PEM), at(2030)), Err(VerifyError::UnknownAuthority { .. })));
    }

    #[test]
    fn test_verify_error_display() {
        let err = VerifyError::UnknownAuthority { issuer: String::from("CN=Nobody") };
        assert_eq!(err.to_string(), "certificate signed by unknown authority CN=Nobody");
        let err = VerifyError::Expired { not_after: at(2020), at: at(2021) };
        assert!(err.to_string().contains("expired"));
    }
}
