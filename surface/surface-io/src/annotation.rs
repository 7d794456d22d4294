//! Annotation file format support.
//!
//! Annotation files (`.annot`) pair surface vertices with packed color
//! codes and append a colortable resolving those codes to named labels.
//! Only the external-colortable layout (negative version field) is
//! supported; the legacy inline layout is rejected.
//!
//! # Format
//!
//! ```text
//! UINT32        – Annotated vertex count
//! foreach annotated vertex
//!     UINT32    – Vertex index
//!     UINT32    – Packed color code (little-endian r, g, b, transparency)
//! end
//! UINT32        – Colortable tag 1
//! INT32         – Version, negative (magnitude is the version number)
//! UINT32        – Maximum entry count (ignored)
//! UINT32        – Colortable filename length including NUL
//! BYTES         – Colortable filename, NUL-terminated
//! UINT32        – Label count
//! foreach label
//!     UINT32    – Label index
//!     UINT32    – Name length including NUL
//!     BYTES     – Name, NUL-terminated
//!     UINT32[4] – Red, green, blue, transparency, each <= 255
//! end
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use surface_annot::{Annotation, Label};

use crate::error::{IoError, IoResult};
use crate::reader::ByteReader;

/// Tag introducing the colortable section.
const TAG_COLORTABLE: u32 = 1;

/// Load an annotation from an annotation file.
///
/// # Arguments
///
/// * `path` - Path to the annotation file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content is not a valid annotation
/// - A vertex color code matches no colortable label
///
/// # Example
///
/// ```no_run
/// use surface_io::load_annotation;
///
/// let annotation = load_annotation("lh.aparc.annot").unwrap();
/// println!("{} labels", annotation.labels().len());
/// ```
pub fn load_annotation<P: AsRef<Path>>(path: P) -> IoResult<Annotation> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    read_annotation(BufReader::new(file))
}

/// Read an annotation from an already-open reader.
fn read_annotation<R: BufRead>(reader: R) -> IoResult<Annotation> {
    let mut reader = ByteReader::new(reader);

    let pair_count = reader.read_u32()?;
    let mut vertex_color_codes = Vec::with_capacity(pair_count as usize);
    for _ in 0..pair_count {
        let vertex_index = reader.read_u32()?;
        let color_code = reader.read_u32()?;
        vertex_color_codes.push((vertex_index, color_code));
    }

    let tag = reader.read_u32()?;
    if tag != TAG_COLORTABLE {
        return Err(IoError::invalid_content(format!(
            "expected colortable tag {TAG_COLORTABLE}, found {tag}"
        )));
    }

    let version = reader.read_i32()?;
    if version >= 0 {
        return Err(IoError::UnsupportedColortableVersion { version });
    }

    let _max_entries = reader.read_u32()?;
    let path_length = reader.read_u32()?;
    let colortable_path = reader.read_nul_terminated(u64::from(path_length))?;

    let label_count = reader.read_u32()?;
    let mut labels = Vec::with_capacity(label_count as usize);
    for _ in 0..label_count {
        labels.push(read_label(&mut reader)?);
    }

    if !reader.at_eof()? {
        return Err(IoError::invalid_content(
            "trailing data after the colortable",
        ));
    }

    Ok(Annotation::from_parts(
        vertex_color_codes,
        Some(colortable_path),
        labels,
    )?)
}

/// Read one colortable label entry.
fn read_label<R: BufRead>(reader: &mut ByteReader<R>) -> IoResult<Label> {
    let index = reader.read_u32()?;
    let name_length = reader.read_u32()?;
    let name = String::from_utf8(reader.read_nul_terminated(u64::from(name_length))?)?;
    let red = read_color_channel(reader)?;
    let green = read_color_channel(reader)?;
    let blue = read_color_channel(reader)?;
    let transparency = read_color_channel(reader)?;
    Ok(Label {
        index,
        name,
        red,
        green,
        blue,
        transparency,
    })
}

/// Read one color channel stored as a `u32` but bounded by a byte.
fn read_color_channel<R: BufRead>(reader: &mut ByteReader<R>) -> IoResult<u8> {
    let value = reader.read_u32()?;
    u8::try_from(value)
        .map_err(|_| IoError::invalid_content(format!("color channel value {value} exceeds 255")))
}
