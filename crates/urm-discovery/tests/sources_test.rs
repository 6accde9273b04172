//! Discovery through on-disk sources: class directories, jars, and JSON indexes.

mod common;

use common::{
    class_bytes, class_bytes_with_constants, discover, never, plain_class, write_class_dir, write_jar,
};
use urm_core::flags::StickyFlag;
use urm_core::traits::TypeSource;
use urm_discovery::sources::archive::ArchiveSource;
use urm_discovery::sources::directory::{DirectorySource, WalkOptions};
use urm_discovery::sources::index_file::IndexFileSource;
use urm_discovery::{AdditionalSource, DiscoveryRequest, TypeCatalog};

static FLAG: StickyFlag = StickyFlag::new(never);

fn locations(paths: &[&std::path::Path]) -> AdditionalSource<'static> {
    AdditionalSource::Locations(paths.iter().map(|p| p.display().to_string()).collect())
}

#[test]
fn class_directory_source() {
    let dir = tempfile::tempdir().unwrap();
    write_class_dir(
        dir.path(),
        &[
            ("com/example/shapes/Shape", class_bytes("com/example/shapes/Shape", Some("java/lang/Object"), &[])),
            ("com/example/shapes/Circle", class_bytes("com/example/shapes/Circle", Some("com/example/shapes/Shape"), &["java/io/Serializable"])),
            ("com/example/shapes/Circle$1", plain_class("com/example/shapes/Circle$1")),
            ("com/example/shapes/Circle$Center", plain_class("com/example/shapes/Circle$Center")),
            ("com/example/shapes/package-info", class_bytes("com/example/shapes/package-info", None, &[])),
            ("com/example/colors/Red", plain_class("com/example/colors/Red")),
        ],
    );
    std::fs::write(dir.path().join("com/example/shapes/README.txt"), b"not a class").unwrap();

    let source = DirectorySource::open(dir.path(), &WalkOptions::default()).unwrap();
    assert_eq!(source.len(), 6);
    let circle = source.resolve("com.example.shapes.Circle").unwrap();
    assert_eq!(circle.supertypes.to_vec(), vec!["com.example.shapes.Shape", "java.io.Serializable"]);

    let request = DiscoveryRequest::new(["com.example.shapes"]).with_additional(locations(&[dir.path()]));
    assert_eq!(
        discover(&TypeCatalog::new("default"), &FLAG, &request),
        vec![
            "com.example.shapes.Circle",
            "com.example.shapes.Circle$Center",
            "com.example.shapes.Shape",
        ]
    );
}

#[test]
fn jar_source_skips_manifest_and_reads_headers() {
    let dir = tempfile::tempdir().unwrap();
    let jar = write_jar(
        &dir.path().join("shapes.jar"),
        &[
            ("com/example/shapes/Square", class_bytes("com/example/shapes/Square", Some("com/example/shapes/Shape"), &[])),
            ("com/example/shapes/Shape", plain_class("com/example/shapes/Shape")),
        ],
    );

    let source = ArchiveSource::open(&jar).unwrap();
    assert_eq!(source.len(), 2);
    let square = source.resolve("com.example.shapes.Square").unwrap();
    assert_eq!(square.supertypes.to_vec(), vec!["com.example.shapes.Shape"]);

    let request = DiscoveryRequest::new(["com.example"]).with_additional(locations(&[jar.as_path()]));
    assert_eq!(
        discover(&TypeCatalog::new("default"), &FLAG, &request),
        vec!["com.example.shapes.Shape", "com.example.shapes.Square"]
    );
}

#[test]
fn corrupt_class_entry_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let jar = write_jar(
        &dir.path().join("broken.jar"),
        &[
            ("a/b/Good", plain_class("a/b/Good")),
            ("a/b/Broken", b"\xCA\xFE\xBA\xBE\x00".to_vec()),
        ],
    );

    let request = DiscoveryRequest::new(["a.b"]).with_additional(locations(&[jar.as_path()]));
    assert_eq!(discover(&TypeCatalog::new("default"), &FLAG, &request), vec!["a.b.Good"]);
}

/// A Utf8 constant holding `"\0"` in the JVM's modified UTF-8 (`C0 80`).
const NUL_CONSTANT: &[u8] = &[1, 0, 2, 0xC0, 0x80];

#[test]
fn modified_utf8_constants_do_not_drop_classes() {
    let with_nul = || class_bytes_with_constants("a/b/WithNul", Some("java/lang/Object"), &[], &[NUL_CONSTANT]);

    let dir = tempfile::tempdir().unwrap();
    let classes = dir.path().join("classes");
    write_class_dir(&classes, &[("a/b/Plain", plain_class("a/b/Plain")), ("a/b/WithNul", with_nul())]);
    let request = DiscoveryRequest::new(["a.b"]).with_additional(locations(&[classes.as_path()]));
    assert_eq!(
        discover(&TypeCatalog::new("default"), &FLAG, &request),
        vec!["a.b.Plain", "a.b.WithNul"]
    );

    let jar = write_jar(&dir.path().join("nul.jar"), &[("a/b/WithNul", with_nul())]);
    let request = DiscoveryRequest::new(["a.b"]).with_additional(locations(&[jar.as_path()]));
    assert_eq!(discover(&TypeCatalog::new("default"), &FLAG, &request), vec!["a.b.WithNul"]);
}

#[test]
fn jar_entry_declaring_another_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let jar = write_jar(
        &dir.path().join("misplaced.jar"),
        &[
            ("a/b/Good", plain_class("a/b/Good")),
            ("a/b/Misplaced", plain_class("de/markusmo3/urm/DomainClassFinder")),
        ],
    );

    let source = ArchiveSource::open(&jar).unwrap();
    assert!(source.resolve("a.b.Misplaced").is_err());

    let request = DiscoveryRequest::new(["a.b"]).with_additional(locations(&[jar.as_path()]));
    assert_eq!(discover(&TypeCatalog::new("default"), &FLAG, &request), vec!["a.b.Good"]);
}

#[test]
fn directory_file_declaring_another_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_class_dir(
        dir.path(),
        &[
            ("a/b/Good", plain_class("a/b/Good")),
            ("a/b/Misplaced", plain_class("de/markusmo3/urm/DomainClassFinder")),
        ],
    );

    let request = DiscoveryRequest::new(["a.b"]).with_additional(locations(&[dir.path()]));
    assert_eq!(discover(&TypeCatalog::new("default"), &FLAG, &request), vec!["a.b.Good"]);
}

#[test]
fn json_index_with_unresolvable_subtype() {
    let dir = tempfile::tempdir().unwrap();
    let index = dir.path().join("types.json");
    std::fs::write(
        &index,
        r#"{
            "types": [
                { "name": "a.b.Base" },
                { "name": "a.b.Impl", "supertypes": ["a.b.Base"] }
            ],
            "subtypes": {
                "a.b.Base": ["a.b.Impl", "a.b.Generated"],
                "x.y.Outside": ["a.b.Impl"]
            }
        }"#,
    )
    .unwrap();

    let source = IndexFileSource::open(&index).unwrap();
    assert!(source.resolve("a.b.Generated").is_err());

    let request = DiscoveryRequest::new(["a.b"]).with_additional(locations(&[index.as_path()]));
    assert_eq!(
        discover(&TypeCatalog::new("default"), &FLAG, &request),
        vec!["a.b.Base", "a.b.Impl"]
    );
}

#[test]
fn malformed_locations_are_dropped_and_rest_scanned() {
    let dir = tempfile::tempdir().unwrap();
    write_class_dir(dir.path(), &[("a/b/FromDir", plain_class("a/b/FromDir"))]);
    let bad_json = dir.path().join("bad.json");
    std::fs::write(&bad_json, b"{ not json").unwrap();
    let not_a_jar = dir.path().join("fake.jar");
    std::fs::write(&not_a_jar, b"plain text").unwrap();

    let request = DiscoveryRequest::new(["a.b"]).with_additional(AdditionalSource::Locations(vec![
        String::new(),
        dir.path().join("missing").display().to_string(),
        bad_json.display().to_string(),
        not_a_jar.display().to_string(),
        dir.path().display().to_string(),
    ]));
    let default = TypeCatalog::with_types("default", ["a.b.FromDefault"]);
    assert_eq!(
        discover(&default, &FLAG, &request),
        vec!["a.b.FromDefault", "a.b.FromDir"]
    );
}

#[test]
fn all_locations_malformed_falls_back_to_defaults() {
    let request = DiscoveryRequest::new(["a.b"])
        .with_additional(AdditionalSource::Locations(vec!["/no/such/dir".to_string()]));
    let default = TypeCatalog::with_types("default", ["a.b.X"]);
    assert_eq!(discover(&default, &FLAG, &request), vec!["a.b.X"]);
}

#[test]
fn provided_source_overlapping_default() {
    let default = TypeCatalog::with_types("default", ["a.b.X", "a.b.Y"]);
    let extra = TypeCatalog::with_types("extra", ["a.b.Y", "a.b.Z"]);
    let request = DiscoveryRequest::new(["a.b"]).with_additional(AdditionalSource::Provided(&extra));
    assert_eq!(discover(&default, &FLAG, &request), vec!["a.b.X", "a.b.Y", "a.b.Z"]);
    // The caller's source is still usable after the run.
    assert_eq!(extra.len(), 2);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_in_class_directory_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_class_dir(dir.path(), &[("a/b/Real", plain_class("a/b/Real"))]);
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("a/b/Dangling.class")).unwrap();

    let options = WalkOptions {
        threads: 1,
        follow_symlinks: true,
    };
    let source = DirectorySource::open(dir.path(), &options).unwrap();
    assert_eq!(source.len(), 1);
    assert!(source.resolve("a.b.Real").is_ok());
}
