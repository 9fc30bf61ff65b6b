use navfix_nmea::checksum;
use navfix_nmea::framer::{Framer, WORKING_BUF_CAPACITY};
use navfix_nmea::sentence::Decode;
use navfix_nmea::Reject;

const GGA_MUNICH: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const RMC_VOID: &str = "$GPRMC,123519,V,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*7D";
const GLL_VANCOUVER: &str = "$GPGLL,4916.45,N,12311.12,W,225444,A*31";

const EPS: f64 = 1e-4;

/// Build a terminated sentence with a correct checksum from its body.
fn with_checksum(body: &str) -> String {
    format!("${}*{:02X}\r\n", body, checksum::checksum(body))
}

#[test]
fn gga_scenario_decodes() {
    let mut framer = Framer::new();
    let outcomes = framer.feed(format!("{}\r\n", GGA_MUNICH).as_bytes());
    assert_eq!(outcomes.len(), 1);
    assert!(matches!(outcomes[0], Ok(Decode::Fix(_))));
    assert!(framer.has_fix());
    let fix = framer.take_fix().expect("fresh fix");
    assert!((fix.lat - 48.1173).abs() < EPS);
    assert!((fix.lon - 11.5167).abs() < EPS);
}

#[test]
fn constructed_rmc_round_trips() {
    let line = with_checksum("GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E");
    let mut framer = Framer::new();
    framer.feed(line.as_bytes());
    assert!(framer.has_fix());
    let fix = framer.take_fix().expect("fresh fix");
    assert!((fix.lat + 37.86083).abs() < EPS);
    assert!((fix.lon - 145.12267).abs() < EPS);
}

#[test]
fn take_fix_consumes_freshness_once() {
    let mut framer = Framer::new();
    framer.feed(format!("{}\r\n", GGA_MUNICH).as_bytes());
    assert!(framer.take_fix().is_some());
    assert!(framer.take_fix().is_none());
    // Still has a fix; just nothing new to report.
    assert!(framer.has_fix());
}

#[test]
fn two_sentences_in_one_chunk_decode_in_order() {
    let second = with_checksum("GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E");
    let chunk = format!("{}\r\n{}", GGA_MUNICH, second);
    let mut framer = Framer::new();
    let outcomes = framer.feed(chunk.as_bytes());
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| matches!(o, Ok(Decode::Fix(_)))));
    // The later sentence wins.
    let fix = framer.take_fix().expect("fresh fix");
    assert!((fix.lat + 37.86083).abs() < EPS);
    assert!((fix.lon - 145.12267).abs() < EPS);
}

#[test]
fn corrupt_checksum_never_mutates_state() {
    let bad = GGA_MUNICH.replace("*47", "*48");
    let mut framer = Framer::new();
    let outcomes = framer.feed(format!("{}\r\n", bad).as_bytes());
    assert!(matches!(
        outcomes[0],
        Err(Reject::ChecksumMismatch { computed: 0x47, stated: 0x48 })
    ));
    assert!(!framer.has_fix());
    assert!(framer.take_fix().is_none());
}

#[test]
fn rmc_void_clears_fix_but_keeps_coordinates() {
    let mut framer = Framer::new();
    framer.feed(format!("{}\r\n", GGA_MUNICH).as_bytes());
    framer.feed(format!("{}\r\n", RMC_VOID).as_bytes());
    assert!(!framer.has_fix());
    // Coordinates from the earlier fix are unaltered and still readable.
    let fix = framer.take_fix().expect("fresh fix from the GGA");
    assert!((fix.lat - 48.1173).abs() < EPS);
    assert!((fix.lon - 11.5167).abs() < EPS);
}

#[test]
fn gll_active_decodes() {
    let mut framer = Framer::new();
    framer.feed(format!("{}\r\n", GLL_VANCOUVER).as_bytes());
    let fix = framer.take_fix().expect("fresh fix");
    assert!((fix.lat - 49.27417).abs() < EPS);
    assert!((fix.lon + 123.18533).abs() < EPS);
}

#[test]
fn oversize_chunk_is_dropped_whole() {
    let mut chunk = Vec::new();
    while chunk.len() < WORKING_BUF_CAPACITY {
        chunk.extend_from_slice(format!("{}\r\n", GGA_MUNICH).as_bytes());
    }
    let mut framer = Framer::new();
    let outcomes = framer.feed(&chunk);
    assert_eq!(outcomes, vec![Err(Reject::ChunkTooLarge { len: chunk.len() })]);
    assert!(!framer.has_fix());
    assert_eq!(framer.stats().chunks_dropped, 1);
}

#[test]
fn sentence_split_across_chunks_is_discarded() {
    let line = format!("{}\r\n", GGA_MUNICH);
    let (head, tail) = line.split_at(30);
    let mut framer = Framer::new();
    assert!(framer.feed(head.as_bytes()).is_empty());
    assert!(framer.feed(tail.as_bytes()).is_empty());
    assert!(!framer.has_fix());
    assert!(framer.take_fix().is_none());
}

#[test]
fn noise_between_sentences_is_skipped() {
    let mut chunk = b"\x00zz$junk\r".to_vec();
    chunk.extend_from_slice(format!("{}\n", GLL_VANCOUVER).as_bytes());
    let mut framer = Framer::new();
    let outcomes = framer.feed(&chunk);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0], Err(Reject::MissingChecksum));
    assert!(matches!(outcomes[1], Ok(Decode::Fix(_))));
    assert!(framer.has_fix());
}

#[test]
fn stats_accumulate_across_chunks() {
    let bad = GGA_MUNICH.replace("*47", "*00");
    let mut framer = Framer::new();
    framer.feed(format!("{}\r\n", GGA_MUNICH).as_bytes());
    framer.feed(format!("{}\r\n", bad).as_bytes());
    let stats = framer.stats();
    assert_eq!(stats.chunks, 2);
    assert_eq!(stats.sentences, 2);
    assert_eq!(stats.fixes, 1);
    assert_eq!(stats.rejects, 1);
}
