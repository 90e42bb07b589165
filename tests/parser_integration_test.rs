use indoc::indoc;
use jcdiff::errors::Error;
use jcdiff::{parse_performance, parse_support};
use pretty_assertions::assert_eq;

const SUPPORT_REPORT: &str = indoc! {"
    This file was generated by AlgTest utility; header noise

    Tested and provided by; Example Lab
    Execution date;2026/05/11 14:02:11
    AlgTest; 1.8.1
    Used reader;Generic USB Reader 0
    Card ATR;3b 90 11 81
    Card name; Test Card A
    Used protocol;T=1
    JavaCard support version;3.0.4
    Total test time;00:41:27

    JCSystem.getVersion()[Major.Minor];3.0
    JCSystem.getAvailableMemory(MEMORY_TYPE_PERSISTENT);32767
    CPLC.ICFabricator;4790
    CPLC.ICType;5168

    ALG_SHA MessageDigest;yes
    ALG_AES_BLOCK_128_CBC_NOPAD Cipher;yes;128
    ALG_RSA_CRT KeyPair;no
"};

#[test]
fn support_report_parses_every_section() {
    let record = parse_support(SUPPORT_REPORT.lines()).unwrap();

    assert_eq!(record.test_info.len(), 9);
    assert_eq!(record.test_info["Card name"], "Test Card A");
    assert_eq!(record.test_info["Used protocol"], "T=1");

    assert_eq!(record.jcsystem.len(), 2);
    assert_eq!(
        record.jcsystem["JCSystem.getAvailableMemory(MEMORY_TYPE_PERSISTENT)"],
        "32767"
    );

    assert_eq!(record.cplc.len(), 2);
    assert_eq!(record.cplc["CPLC.ICType"], "5168");

    assert_eq!(record.support.len(), 3);
    assert_eq!(record.support["ALG_RSA_CRT KeyPair"].status, "no");
    assert_eq!(
        record.support["ALG_AES_BLOCK_128_CBC_NOPAD Cipher"].detail,
        Some("128".to_string())
    );
}

#[test]
fn performance_report_parses_alongside_its_header() {
    let report = indoc! {"
        Card name; Test Card A
        Total test time;00:12:01

        MESSAGE DIGEST ALG_SHA hash;10.2,9.8,10.0;1.1,0.9
        KeyBuilder TYPE_AES setKey;NO_SUCH_ALGORITHM
    "};

    let store = parse_performance(report.lines()).unwrap();
    assert_eq!(store.len(), 2);

    let hash = store.get("MESSAGE DIGEST ALG_SHA hash").unwrap();
    assert_eq!(hash.operation_avg(), 10.0);
    assert_eq!(hash.baseline_avg(), 1.0);

    let failed = store.get("KeyBuilder TYPE_AES setKey").unwrap();
    assert_eq!(failed.error(), Some("NO_SUCH_ALGORITHM"));
}

#[test]
fn parse_errors_identify_the_offending_line() {
    let report = indoc! {"
        MESSAGE DIGEST ALG_SHA hash;10.2,9.8;1.1
        CIPHER broken;1.0,two;2.0
    "};

    let err = parse_performance(report.lines()).unwrap_err();
    match err {
        Error::Parse {
            line, field, key, ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(field, Some(2));
            assert_eq!(key.as_deref(), Some("CIPHER broken"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn both_passes_share_discard_rules() {
    let noise = indoc! {"
        This file was generated by AlgTest utility; x
        no separator line
        ;
    "};

    assert_eq!(parse_support(noise.lines()).unwrap(), Default::default());
    assert!(parse_performance(noise.lines()).unwrap().is_empty());
}
