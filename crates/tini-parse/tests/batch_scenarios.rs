//! Integration tests: batches parsed end to end through the public API.

use tini_arena::ArenaConfig;
use tini_core::ChunkId;
use tini_parse::{parse_multi, FinalLine, ParseConfig, Pool};
use tini_test_utils::fixtures::{
    BLANK_RUNS, DUPLICATE_SECTIONS, MIXED_TERMINATORS, NEAR_HEADERS, SCENARIO_A, SCENARIO_B,
    SERVICE, SERVICE_SECTIONS,
};
use tini_test_utils::TextBatch;

fn pool() -> Pool {
    Pool::new(&ArenaConfig::default()).unwrap()
}

#[test]
fn two_file_scenario() {
    let mut batch = TextBatch::from_files([("a.ini", SCENARIO_A), ("b.ini", SCENARIO_B)]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.chunk(ChunkId(0)).unwrap().section_names(), vec![None, Some("x")]);
    assert_eq!(set.chunk(ChunkId(1)).unwrap().section_names(), vec![None, Some("y")]);

    let (chunk, y) = set.find_section_all("y").unwrap();
    assert_eq!(chunk, ChunkId(1));
    assert_eq!(y, set.chunk(ChunkId(1)).unwrap().section(1).unwrap());
    assert_eq!(y.get("b"), Some("2"));

    let unnamed_b = set.chunk(ChunkId(1)).unwrap().section(0).unwrap();
    assert_eq!(unnamed_b.get("a"), Some("1"));

    assert!(set.find_section_all("z").is_none());
}

#[test]
fn terminator_neutrality() {
    let mut batch = TextBatch::from_files([("mixed.ini", MIXED_TERMINATORS), ("blank.ini", BLANK_RUNS)]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    let expected = vec![None, Some("a"), Some("b"), Some("c")];
    for chunk in set.chunks() {
        assert_eq!(chunk.section_names(), expected, "{}", chunk.name());
    }
}

#[test]
fn discarding_final_line_drops_unterminated_header() {
    let mut batch = TextBatch::from_files([("blank.ini", BLANK_RUNS)]);
    let mut units = batch.units();
    let mut pool = pool();
    let config = ParseConfig::with_final_line(FinalLine::Discard);
    let set = parse_multi(&mut pool, &mut units, &config).unwrap();
    assert_eq!(
        set.chunk(ChunkId(0)).unwrap().section_names(),
        vec![None, Some("a"), Some("b")]
    );
}

#[test]
fn lookup_returns_first_duplicate() {
    let mut batch = TextBatch::from_files([("dup.ini", DUPLICATE_SECTIONS)]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    let chunk = set.chunk(ChunkId(0)).unwrap();
    let found = chunk.find_section("dup").unwrap();
    assert_eq!(found, chunk.section(1).unwrap());
    assert_eq!(found.get("which"), Some("first"));
    assert_eq!(set.find_section(ChunkId(0), "dup"), Some(found));
}

#[test]
fn lookup_is_exact() {
    let mut batch = TextBatch::from_files([("svc.ini", SERVICE)]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    assert!(set.find_section_all("Server").is_none());
    assert!(set.find_section_all(" server").is_none());
    assert!(set.find_section_all("server").is_some());
    // `[]` is named "", distinct from the unnamed section.
    let (_, empty) = set.find_section_all("").unwrap();
    assert_eq!(empty.name(), Some(""));
    assert_eq!(empty.get("empty_name"), Some("yes"));
}

#[test]
fn non_utf8_names_match_only_their_own_bytes() {
    let mut batch = TextBatch::new();
    batch
        .push("a.ini", b"[caf\xe9]\nsrc = latin1\n")
        .push("b.ini", "[caf\u{fffd}]\nsrc = utf8\n");
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    // Both render the same, but only byte-equal queries match.
    assert_eq!(
        set.chunk(ChunkId(0)).unwrap().section_names(),
        set.chunk(ChunkId(1)).unwrap().section_names()
    );

    let (chunk, utf8) = set.find_section_all("caf\u{fffd}").unwrap();
    assert_eq!(chunk, ChunkId(1));
    assert_eq!(utf8.get("src"), Some("utf8"));

    let (chunk, latin1) = set.find_section_all(b"caf\xe9").unwrap();
    assert_eq!(chunk, ChunkId(0));
    assert_eq!(latin1.get("src"), Some("latin1"));
    assert_eq!(latin1.name_bytes(), Some(&b"caf\xe9"[..]));
    assert_eq!(latin1.name(), Some("caf\u{fffd}"));

    assert!(set.find_section(ChunkId(0), "caf\u{fffd}").is_none());
    assert!(set.find_section(ChunkId(1), b"caf\xe9").is_none());
    assert!(set.find_section_all("caf").is_none());
}

#[test]
fn keys_compare_as_bytes() {
    let text = b"[s]\nk\xff = raw\nk\xef\xbf\xbd = text\n";
    let mut batch = TextBatch::from_files([("k.ini", text)]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    let (_, s) = set.find_section_all("s").unwrap();
    assert_eq!(s.get(b"k\xff"), Some("raw"));
    assert_eq!(s.get("k\u{fffd}"), Some("text"));
    assert_eq!(s.get_all("k\u{fffd}").collect::<Vec<_>>(), ["text"]);
    let first = s.keys().next().unwrap();
    assert_eq!(first.key(), "k\u{fffd}");
    assert_eq!(first.key_bytes(), b"k\xff");
}

#[test]
fn miss_across_three_chunks_leaves_pool_untouched() {
    let mut batch = TextBatch::from_files([
        ("a.ini", SCENARIO_A),
        ("b.ini", SCENARIO_B),
        ("svc.ini", SERVICE),
    ]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    let before = set.pool().stats();
    assert!(set.find_section_all("absent").is_none());
    assert!(set.find_section(ChunkId(7), "x").is_none());
    assert_eq!(set.pool().stats(), before);
}

#[test]
fn near_headers_are_body_text() {
    let mut batch = TextBatch::from_files([("near.ini", NEAR_HEADERS)]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();

    let chunk = set.chunk(ChunkId(0)).unwrap();
    assert_eq!(chunk.section_names(), vec![None]);
    let keys: Vec<_> = chunk
        .section(0)
        .unwrap()
        .keys()
        .map(|kv| (kv.key(), kv.value()))
        .collect();
    assert_eq!(
        keys,
        vec![("foo", "bar"), ("[unclosed", ""), ("[bad;name]", "")]
    );
}

#[test]
fn service_document() {
    let mut batch = TextBatch::from_files([("svc.ini", SERVICE)]);
    let mut units = batch.units();
    let mut pool = pool();
    let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();
    let chunk = set.chunk(ChunkId(0)).unwrap();

    assert_eq!(chunk.section_names(), SERVICE_SECTIONS.to_vec());

    let unnamed = chunk.section(0).unwrap();
    assert_eq!(unnamed.get("name"), Some("tini-demo"));
    assert_eq!(unnamed.get("debug"), Some(""));

    let server = chunk.find_section("server").unwrap();
    assert_eq!(server.key_count(), 2);
    assert_eq!(
        server.get("port"),
        Some("8080   ; not a comment, part of the value")
    );

    let paths = chunk.find_section("paths").unwrap();
    assert_eq!(paths.get("root"), Some("/srv/tini"));
    assert_eq!(
        paths.get_all("root").collect::<Vec<_>>(),
        vec!["/srv/tini", "/srv/override"]
    );
    assert_eq!(paths.keys().len(), 2);
}

#[test]
fn results_outlive_the_file_buffers() {
    let mut pool = pool();
    let chunk = {
        let mut batch = TextBatch::from_files([("a.ini", "[kept]\nk = v\n")]);
        let mut units = batch.units();
        let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();
        let chunk = set.chunk(ChunkId(0)).unwrap().chunk().clone();
        drop(units);
        drop(batch);
        chunk
    };
    let kept = chunk.section_refs()[1];
    let section = tini_parse::lookup::find_section(&pool, &chunk, "kept").unwrap();
    assert_eq!(section.id(), kept);
    assert_eq!(section.get("k"), Some("v"));
}
