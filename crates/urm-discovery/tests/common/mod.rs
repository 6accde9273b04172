#![allow(dead_code)]
//! Shared fixtures: hand-assembled class files, class directories, jars.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use urm_core::flags::StickyFlag;
use urm_discovery::{DiscoveryRequest, DomainTypeFinder, TypeCatalog};
use zip::write::SimpleFileOptions;

pub fn never() -> bool {
    false
}

/// Header-only class file. Names use internal form (`a/b/C`).
pub fn class_bytes(name: &str, super_name: Option<&str>, interfaces: &[&str]) -> Vec<u8> {
    class_bytes_with_constants(name, super_name, interfaces, &[])
}

/// Like [`class_bytes`], with raw constant-pool entries (tag included)
/// appended after the class names.
pub fn class_bytes_with_constants(
    name: &str,
    super_name: Option<&str>,
    interfaces: &[&str],
    extra: &[&[u8]],
) -> Vec<u8> {
    let mut names = vec![name];
    names.extend(super_name);
    names.extend_from_slice(interfaces);

    let mut out = Vec::new();
    out.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&61u16.to_be_bytes());
    out.extend_from_slice(&((names.len() * 2 + extra.len() + 1) as u16).to_be_bytes());
    for (i, n) in names.iter().enumerate() {
        out.push(1);
        out.extend_from_slice(&(n.len() as u16).to_be_bytes());
        out.extend_from_slice(n.as_bytes());
        out.push(7);
        out.extend_from_slice(&((i * 2 + 1) as u16).to_be_bytes());
    }
    for constant in extra {
        out.extend_from_slice(constant);
    }
    let class_index = |i: usize| ((i * 2 + 2) as u16).to_be_bytes();
    out.extend_from_slice(&0x0021u16.to_be_bytes());
    out.extend_from_slice(&class_index(0));
    match super_name {
        Some(_) => out.extend_from_slice(&class_index(1)),
        None => out.extend_from_slice(&0u16.to_be_bytes()),
    }
    let first_interface = if super_name.is_some() { 2 } else { 1 };
    out.extend_from_slice(&(interfaces.len() as u16).to_be_bytes());
    for i in 0..interfaces.len() {
        out.extend_from_slice(&class_index(first_interface + i));
    }
    // fields, methods, attributes
    out.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    out
}

/// A class extending `java/lang/Object`.
pub fn plain_class(name: &str) -> Vec<u8> {
    class_bytes(name, Some("java/lang/Object"), &[])
}

/// Write `(internal name, bytes)` pairs as `<root>/<name>.class`.
pub fn write_class_dir(root: &Path, classes: &[(&str, Vec<u8>)]) {
    for (name, bytes) in classes {
        let path = root.join(format!("{}.class", name));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, bytes).unwrap();
    }
}

/// Write a jar holding `(internal name, bytes)` class entries plus a manifest.
pub fn write_jar(path: &Path, classes: &[(&str, Vec<u8>)]) -> PathBuf {
    let file = File::create(path).unwrap();
    let mut jar = zip::ZipWriter::new(file);
    let options = || SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    jar.start_file("META-INF/MANIFEST.MF", options()).unwrap();
    jar.write_all(b"Manifest-Version: 1.0\n").unwrap();
    for (name, bytes) in classes {
        jar.start_file(format!("{}.class", name), options()).unwrap();
        jar.write_all(bytes).unwrap();
    }
    jar.finish().unwrap();
    path.to_path_buf()
}

/// Run a discovery against `default` with an empty global source.
pub fn discover(
    default: &TypeCatalog,
    flag: &StickyFlag,
    request: &DiscoveryRequest<'_>,
) -> Vec<String> {
    let global = TypeCatalog::new("global");
    DomainTypeFinder::new(default)
        .with_global(&global)
        .with_internal_flag(flag)
        .find_types(request)
        .unwrap()
        .into_iter()
        .map(|ty| ty.name)
        .collect()
}
