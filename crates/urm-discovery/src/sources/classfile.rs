//! Minimal class-file reader: just enough of the header to learn a type's
//! binary name, its superclass, and its interfaces.

use thiserror::Error;

use urm_core::types::namespace::binary_name_from_internal;

const MAGIC: u32 = 0xCAFE_BABE;

#[derive(Debug, Error)]
pub enum ClassParseError {
    #[error("unexpected end of class file")]
    UnexpectedEof,
    #[error("invalid class file magic header")]
    InvalidMagic,
    #[error("unsupported constant pool tag {tag}")]
    UnsupportedConstant { tag: u8 },
    #[error("invalid constant pool index {index}")]
    InvalidConstantIndex { index: u16 },
    #[error("invalid modified UTF-8 in constant pool entry {index}")]
    InvalidModifiedUtf8 { index: u16 },
}

/// The identifying part of a class file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    /// Dotted binary name, e.g. `a.b.Outer$Inner`.
    pub name: String,
    /// Dotted superclass name; `None` for `java.lang.Object` and `module-info`.
    pub super_name: Option<String>,
    pub interfaces: Vec<String>,
}

impl ClassHeader {
    /// Superclass followed by interfaces.
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.super_name
            .iter()
            .chain(self.interfaces.iter())
            .map(String::as_str)
    }
}

pub fn parse_class_header(bytes: &[u8]) -> Result<ClassHeader, ClassParseError> {
    let mut reader = ClassReader::new(bytes);
    reader.expect_magic()?;
    let _minor_version = reader.read_u2()?;
    let _major_version = reader.read_u2()?;
    let constant_pool = ConstantPool::parse(&mut reader)?;

    let _access_flags = reader.read_u2()?;
    let this_class = reader.read_u2()?;
    let super_class = reader.read_u2()?;

    let interfaces_count = reader.read_u2()?;
    let mut interfaces = Vec::with_capacity(interfaces_count as usize);
    for _ in 0..interfaces_count {
        let index = reader.read_u2()?;
        interfaces.push(binary_name_from_internal(&constant_pool.class_name(index)?));
    }

    // Module descriptors carry a this_class of "module-info" and no superclass.
    let name = binary_name_from_internal(&constant_pool.class_name(this_class)?);
    let super_name = if super_class == 0 {
        None
    } else {
        Some(binary_name_from_internal(&constant_pool.class_name(super_class)?))
    };

    Ok(ClassHeader {
        name,
        super_name,
        interfaces,
    })
}

#[derive(Debug, Clone)]
enum Constant<'a> {
    /// Raw modified UTF-8; decoded only when reached through a class entry.
    Utf8(&'a [u8]),
    Class { name_index: u16 },
    Other,
    Unusable,
}

struct ConstantPool<'a> {
    entries: Vec<Constant<'a>>,
}

impl<'a> ConstantPool<'a> {
    fn parse(reader: &mut ClassReader<'a>) -> Result<Self, ClassParseError> {
        let count = reader.read_u2()? as usize;
        let mut entries = Vec::with_capacity(count);
        entries.push(Constant::Unusable); // index 0 unused
        let mut index = 1;
        while index < count {
            let tag = reader.read_u1()?;
            let entry = match tag {
                1 => {
                    let length = reader.read_u2()? as usize;
                    Constant::Utf8(reader.read_slice(length)?)
                }
                7 => Constant::Class {
                    name_index: reader.read_u2()?,
                },
                // Integer, Float, field/method/interface refs, NameAndType,
                // Dynamic, InvokeDynamic
                3 | 4 | 9 | 10 | 11 | 12 | 17 | 18 => {
                    reader.skip(4)?;
                    Constant::Other
                }
                // Long and Double take two slots.
                5 | 6 => {
                    reader.skip(8)?;
                    entries.push(Constant::Other);
                    index += 1;
                    Constant::Unusable
                }
                // String, MethodType, Module, Package
                8 | 16 | 19 | 20 => {
                    reader.skip(2)?;
                    Constant::Other
                }
                // MethodHandle
                15 => {
                    reader.skip(3)?;
                    Constant::Other
                }
                other => return Err(ClassParseError::UnsupportedConstant { tag: other }),
            };
            entries.push(entry);
            index += 1;
        }
        Ok(Self { entries })
    }

    fn get(&self, index: u16) -> Result<&Constant<'a>, ClassParseError> {
        self.entries
            .get(index as usize)
            .ok_or(ClassParseError::InvalidConstantIndex { index })
    }

    fn utf8(&self, index: u16) -> Result<String, ClassParseError> {
        match self.get(index)? {
            Constant::Utf8(bytes) => {
                decode_modified_utf8(bytes).ok_or(ClassParseError::InvalidModifiedUtf8 { index })
            }
            _ => Err(ClassParseError::InvalidConstantIndex { index }),
        }
    }

    fn class_name(&self, index: u16) -> Result<String, ClassParseError> {
        match self.get(index)? {
            Constant::Class { name_index } => self.utf8(*name_index),
            _ => Err(ClassParseError::InvalidConstantIndex { index }),
        }
    }
}

/// Decode the JVM's modified UTF-8: `C0 80` encodes NUL and supplementary
/// characters arrive as surrogate pairs of three-byte sequences.
fn decode_modified_utf8(bytes: &[u8]) -> Option<String> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        let continuation = |offset: usize| {
            bytes
                .get(i + offset)
                .filter(|b| *b & 0xC0 == 0x80)
                .map(|b| u16::from(*b & 0x3F))
        };
        match b0 {
            0x01..=0x7F => {
                units.push(u16::from(b0));
                i += 1;
            }
            0xC0..=0xDF => {
                units.push((u16::from(b0 & 0x1F) << 6) | continuation(1)?);
                i += 2;
            }
            0xE0..=0xEF => {
                units.push((u16::from(b0 & 0x0F) << 12) | (continuation(1)? << 6) | continuation(2)?);
                i += 3;
            }
            _ => return None,
        }
    }
    String::from_utf16(&units).ok()
}

struct ClassReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ClassReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn expect_magic(&mut self) -> Result<(), ClassParseError> {
        if self.read_u4()? != MAGIC {
            return Err(ClassParseError::InvalidMagic);
        }
        Ok(())
    }

    fn read_slice(&mut self, len: usize) -> Result<&'a [u8], ClassParseError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(ClassParseError::UnexpectedEof)?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u1(&mut self) -> Result<u8, ClassParseError> {
        Ok(self.read_slice(1)?[0])
    }

    fn read_u2(&mut self) -> Result<u16, ClassParseError> {
        let bytes = self.read_slice(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u4(&mut self) -> Result<u32, ClassParseError> {
        let bytes = self.read_slice(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn skip(&mut self, len: usize) -> Result<(), ClassParseError> {
        self.read_slice(len).map(|_| ())
    }
}
