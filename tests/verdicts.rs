//! Provider response parsing and verdict mapping, exercised without a
//! network.

use pdfsec::domain::models::{FileGeneralInfo, Verdict, VtStats};
use pdfsec::providers::{opentip, virustotal};

#[test]
fn vt_verdict_clean_when_no_malicious_detections() {
    let stats = VtStats {
        harmless: 10,
        malicious: 0,
        suspicious: 7,
        undetected: 40,
    };
    assert_eq!(virustotal::verdict_from_stats(&stats), Verdict::Clean);
}

#[test]
fn vt_verdict_malicious_on_any_detection() {
    let stats = VtStats {
        harmless: 70,
        malicious: 1,
        suspicious: 0,
        undetected: 0,
    };
    assert_eq!(virustotal::verdict_from_stats(&stats), Verdict::Malicious);
}

#[test]
fn vt_upload_response_yields_analysis_id() {
    let body = r#"{"data":{"id":"NjY0-abc-123","type":"analysis"}}"#;
    assert_eq!(
        virustotal::parse_upload_response(body).unwrap(),
        "NjY0-abc-123"
    );
}

#[test]
fn vt_upload_response_without_id_is_an_error() {
    let err = virustotal::parse_upload_response(r#"{"data":{}}"#).unwrap_err();
    assert!(err.to_string().contains("data.id"), "got: {err}");
}

#[test]
fn vt_analysis_response_pending_then_completed() {
    let pending = r#"{"data":{"attributes":{"status":"queued"}}}"#;
    let analysis = virustotal::parse_analysis_response(pending).unwrap();
    assert!(!analysis.completed());

    let done = r#"{"data":{"attributes":{"status":"Completed",
        "stats":{"harmless":62,"malicious":2,"suspicious":1,"undetected":9}}}}"#;
    let analysis = virustotal::parse_analysis_response(done).unwrap();
    assert!(analysis.completed());
    assert_eq!(analysis.stats.malicious, 2);
    assert_eq!(analysis.stats.harmless, 62);
}

#[test]
fn zone_maps_case_insensitively() {
    assert_eq!(opentip::verdict_from_zone("red"), Verdict::Malicious);
    assert_eq!(opentip::verdict_from_zone("Red"), Verdict::Malicious);
    assert_eq!(
        opentip::verdict_from_zone("YELLOW"),
        Verdict::PotentiallyUnwanted
    );
    assert_eq!(opentip::verdict_from_zone("green"), Verdict::Clean);
    assert_eq!(opentip::verdict_from_zone("grey"), Verdict::Unknown);
    assert_eq!(opentip::verdict_from_zone(""), Verdict::Unknown);
}

#[test]
fn opentip_status_completion_check() {
    assert!(opentip::is_complete(Some("Complete")));
    assert!(opentip::is_complete(Some("complete")));
    assert!(!opentip::is_complete(Some("Pending")));
    assert!(!opentip::is_complete(None));
}

#[test]
fn hash_preference_chain() {
    let full = FileGeneralInfo {
        md5: Some("m".into()),
        sha1: Some("s1".into()),
        sha256: Some("s256".into()),
        ..Default::default()
    };
    assert_eq!(opentip::preferred_hash(&full), Some("s256"));

    let no_sha256 = FileGeneralInfo {
        md5: Some("m".into()),
        sha1: Some("s1".into()),
        ..Default::default()
    };
    assert_eq!(opentip::preferred_hash(&no_sha256), Some("s1"));

    let md5_only = FileGeneralInfo {
        md5: Some("m".into()),
        ..Default::default()
    };
    assert_eq!(opentip::preferred_hash(&md5_only), Some("m"));

    assert_eq!(opentip::preferred_hash(&FileGeneralInfo::default()), None);
}

#[test]
fn opentip_report_parses_and_classifies() {
    let body = r#"{
        "Zone": "Yellow",
        "FileStatus": "Complete",
        "FileGeneralInfo": {
            "MD5": "9e107d9d372bb6826bd81d3542a419d6",
            "SHA256": "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
            "Size": 12345,
            "Type": "Pdf"
        }
    }"#;
    let report = opentip::parse_report(body).unwrap();
    assert_eq!(opentip::report_verdict(&report), Verdict::PotentiallyUnwanted);
    assert_eq!(report.info.size, Some(12345));
    assert!(opentip::is_complete(report.status.as_deref()));
}

#[test]
fn opentip_report_without_zone_is_unknown() {
    let report = opentip::parse_report(r#"{"FileStatus":"Complete"}"#).unwrap();
    assert_eq!(opentip::report_verdict(&report), Verdict::Unknown);
}
