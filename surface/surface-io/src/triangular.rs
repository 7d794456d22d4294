//! Triangular surface file format support.
//!
//! The format is big-endian binary with a short ASCII comment up front,
//! as produced by the common neuroimaging reconstruction tools (for
//! example `lh.pial` or `rh.white`).
//!
//! # Format
//!
//! ```text
//! UINT8[3]      – Magic ff ff fe
//! BYTES + '\n'  – Comment: "created by <creator> on <timestamp>"
//! '\n'          – Blank line
//! UINT32        – Vertex count
//! UINT32        – Triangle count
//! foreach vertex
//!     REAL32[3] – Right, anterior, superior coordinates
//! end
//! foreach triangle
//!     UINT32[3] – Corner vertex indices, each < vertex count
//! end
//! UINT32        – Tag 2, followed by UINT32 old-real-RAS flag (0 or 1)
//! UINT32        – Tag 20, followed by 8 newline-terminated lines of
//!                 volume geometry info
//! foreach recorded command line
//!     UINT32    – Tag 3
//!     UINT64    – Length including the NUL terminator
//!     BYTES     – Command line, NUL-terminated
//! end
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use surface_types::{Surface, Triangle, Vertex};

use crate::error::{IoError, IoResult};
use crate::reader::ByteReader;

/// Magic bytes opening a triangular surface file.
const TRIANGULAR_MAGIC: [u8; 3] = [0xff, 0xff, 0xfe];

/// Tag preceding the old-real-RAS flag.
const TAG_USING_OLD_REAL_RAS: u32 = 2;

/// Tag preceding one recorded command line.
const TAG_COMMAND_LINE: u32 = 3;

/// Tag preceding the eight volume geometry lines.
const TAG_VOLUME_GEOMETRY: u32 = 20;

/// Timestamp layout of the comment line. `%e` pads single-digit days
/// with a space, `Thu May  9 22:37:41 2019`.
const CREATION_DATETIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Creator written when the surface does not name one.
const DEFAULT_CREATOR: &str = "crates.io/crates/surface";

/// Load a surface from a triangular surface file.
///
/// # Arguments
///
/// * `path` - Path to the surface file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content is not a valid triangular surface
///
/// # Example
///
/// ```no_run
/// use surface_io::load_triangular;
///
/// let surface = load_triangular("lh.pial").unwrap();
/// println!("Loaded {} triangles", surface.triangle_count());
/// ```
pub fn load_triangular<P: AsRef<Path>>(path: P) -> IoResult<Surface> {
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
    read_surface(BufReader::new(file))
}

/// Read a surface from an already-open reader.
fn read_surface<R: BufRead>(reader: R) -> IoResult<Surface> {
    let mut reader = ByteReader::new(reader);

    let magic: [u8; 3] = reader.read_array()?;
    if magic != TRIANGULAR_MAGIC {
        return Err(IoError::UnsupportedMagic { magic });
    }

    let comment = String::from_utf8(reader.read_line_bytes()?)?;
    let (creator, creation_datetime) = parse_creation_comment(&comment);
    if reader.read_array::<1>()? != [b'\n'] {
        return Err(IoError::invalid_content(
            "expected a blank line after the comment",
        ));
    }

    let vertex_count = reader.read_u32()?;
    let triangle_count = reader.read_u32()?;
    let mut surface = Surface::with_capacity(vertex_count as usize, triangle_count as usize);
    surface.creator = creator;
    surface.creation_datetime = creation_datetime;

    for _ in 0..vertex_count {
        let right = reader.read_f32()?;
        let anterior = reader.read_f32()?;
        let superior = reader.read_f32()?;
        surface.vertices.push(Vertex::new(right, anterior, superior));
    }

    for _ in 0..triangle_count {
        let corners = [reader.read_u32()?, reader.read_u32()?, reader.read_u32()?];
        for corner in corners {
            if corner >= vertex_count {
                return Err(IoError::invalid_content(format!(
                    "triangle corner {corner} exceeds vertex count {vertex_count}"
                )));
            }
        }
        surface.triangles.push(Triangle::new(corners));
    }

    while let Some(tag) = reader.read_u32_or_eof()? {
        match tag {
            TAG_USING_OLD_REAL_RAS => {
                surface.using_old_real_ras = match reader.read_u32()? {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(IoError::invalid_content(format!(
                            "old-real-RAS flag must be 0 or 1, found {other}"
                        )));
                    }
                };
            }
            TAG_VOLUME_GEOMETRY => {
                let mut lines: [String; 8] = Default::default();
                for line in &mut lines {
                    *line = String::from_utf8(reader.read_line_raw()?)?;
                }
                surface.volume_geometry_info = Some(lines);
            }
            TAG_COMMAND_LINE => {
                let length = reader.read_u64()?;
                let bytes = reader.read_nul_terminated(length)?;
                surface.command_lines.push(String::from_utf8(bytes)?);
            }
            other => {
                return Err(IoError::invalid_content(format!("unknown tag {other}")));
            }
        }
    }

    Ok(surface)
}

/// Split the comment line into creator and creation timestamp.
///
/// Creators may contain spaces or slashes, so the split happens at the
/// last ` on `. A comment of any other shape yields neither field.
fn parse_creation_comment(comment: &str) -> (Option<String>, Option<NaiveDateTime>) {
    let Some(rest) = comment.strip_prefix("created by ") else {
        return (None, None);
    };
    let Some((creator, timestamp)) = rest.rsplit_once(" on ") else {
        return (None, None);
    };
    NaiveDateTime::parse_from_str(timestamp, CREATION_DATETIME_FORMAT)
        .map_or((None, None), |creation_datetime| {
            (Some(creator.to_string()), Some(creation_datetime))
        })
}

/// Save a surface to a triangular surface file, stamped with the
/// current local time.
///
/// # Errors
///
/// Returns an error if:
/// - The surface has no volume geometry info
/// - The file cannot be written
///
/// # Example
///
/// ```no_run
/// use surface_io::{load_triangular, save_triangular};
///
/// let surface = load_triangular("lh.pial").unwrap();
/// save_triangular(&surface, "lh.pial.copy").unwrap();
/// ```
pub fn save_triangular<P: AsRef<Path>>(surface: &Surface, path: P) -> IoResult<()> {
    save_triangular_with_timestamp(surface, path, Local::now().naive_local())
}

/// Save a surface with an explicit creation timestamp in its comment
/// line.
///
/// The timestamp only affects the written comment; the surface's own
/// `creation_datetime` field is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The surface has no volume geometry info
/// - The file cannot be written
pub fn save_triangular_with_timestamp<P: AsRef<Path>>(
    surface: &Surface,
    path: P,
    timestamp: NaiveDateTime,
) -> IoResult<()> {
    let file = File::create(path)?;
    write_surface(surface, timestamp, BufWriter::new(file))
}

/// Write a surface to an already-open writer.
fn write_surface<W: Write>(
    surface: &Surface,
    timestamp: NaiveDateTime,
    mut writer: W,
) -> IoResult<()> {
    let Some(volume_geometry_info) = &surface.volume_geometry_info else {
        return Err(IoError::MissingVolumeGeometry);
    };

    writer.write_all(&TRIANGULAR_MAGIC)?;
    let creator = surface.creator.as_deref().unwrap_or(DEFAULT_CREATOR);
    write!(
        writer,
        "created by {creator} on {}\n\n",
        timestamp.format(CREATION_DATETIME_FORMAT)
    )?;

    let vertex_count = u32::try_from(surface.vertices.len())
        .map_err(|_| IoError::invalid_content("vertex count exceeds the u32 range"))?;
    let triangle_count = u32::try_from(surface.triangles.len())
        .map_err(|_| IoError::invalid_content("triangle count exceeds the u32 range"))?;
    writer.write_all(&vertex_count.to_be_bytes())?;
    writer.write_all(&triangle_count.to_be_bytes())?;

    for vertex in &surface.vertices {
        writer.write_all(&vertex.right.to_be_bytes())?;
        writer.write_all(&vertex.anterior.to_be_bytes())?;
        writer.write_all(&vertex.superior.to_be_bytes())?;
    }

    for triangle in &surface.triangles {
        for corner in triangle.vertex_indices() {
            if corner >= vertex_count {
                return Err(IoError::invalid_content(format!(
                    "triangle corner {corner} exceeds vertex count {vertex_count}"
                )));
            }
            writer.write_all(&corner.to_be_bytes())?;
        }
    }

    writer.write_all(&TAG_USING_OLD_REAL_RAS.to_be_bytes())?;
    writer.write_all(&u32::from(surface.using_old_real_ras).to_be_bytes())?;

    writer.write_all(&TAG_VOLUME_GEOMETRY.to_be_bytes())?;
    for line in volume_geometry_info {
        writer.write_all(line.as_bytes())?;
    }

    for command_line in &surface.command_lines {
        writer.write_all(&TAG_COMMAND_LINE.to_be_bytes())?;
        let length = command_line.len() as u64 + 1;
        writer.write_all(&length.to_be_bytes())?;
        writer.write_all(command_line.as_bytes())?;
        writer.write_all(&[0])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn pinned_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 5, 22)
            .unwrap()
            .and_hms_opt(7, 52, 53)
            .unwrap()
    }

    fn short_geometry_lines() -> [String; 8] {
        ["a\n", "b\n", "c\n", "d\n", "e\n", "f\n", "g\n", "h\n"].map(String::from)
    }

    fn sample_surface() -> Surface {
        let mut surface = Surface::new();
        surface.creator = Some("tester".to_string());
        surface.using_old_real_ras = true;
        surface.volume_geometry_info = Some(short_geometry_lines());
        surface.command_lines.push("recon -x".to_string());
        surface.add_vertex(Vertex::new(1.0, 2.0, 3.0));
        surface.add_vertex(Vertex::new(4.0, 5.0, 6.0));
        surface.add_vertex(Vertex::new(7.0, 8.0, 9.0));
        surface.triangles.push(Triangle::new([0, 1, 2]));
        surface
    }

    fn sample_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0xff, 0xff, 0xfe]);
        bytes.extend_from_slice(b"created by tester on Sat May 22 07:52:53 2021\n\n");
        bytes.extend_from_slice(&3_u32.to_be_bytes());
        bytes.extend_from_slice(&1_u32.to_be_bytes());
        for coordinate in [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0] {
            bytes.extend_from_slice(&coordinate.to_be_bytes());
        }
        for corner in [0_u32, 1, 2] {
            bytes.extend_from_slice(&corner.to_be_bytes());
        }
        bytes.extend_from_slice(&TAG_USING_OLD_REAL_RAS.to_be_bytes());
        bytes.extend_from_slice(&1_u32.to_be_bytes());
        bytes.extend_from_slice(&TAG_VOLUME_GEOMETRY.to_be_bytes());
        bytes.extend_from_slice(b"a\nb\nc\nd\ne\nf\ng\nh\n");
        bytes.extend_from_slice(&TAG_COMMAND_LINE.to_be_bytes());
        bytes.extend_from_slice(&9_u64.to_be_bytes());
        bytes.extend_from_slice(b"recon -x\0");
        bytes
    }

    #[test]
    fn timestamp_format_pads_single_digit_days_with_a_space() {
        let timestamp = NaiveDate::from_ymd_opt(2019, 5, 9)
            .unwrap()
            .and_hms_opt(22, 37, 41)
            .unwrap();
        assert_eq!(
            timestamp.format(CREATION_DATETIME_FORMAT).to_string(),
            "Thu May  9 22:37:41 2019"
        );
    }

    #[test]
    fn comment_parsing_extracts_creator_and_timestamp() {
        let (creator, creation_datetime) =
            parse_creation_comment("created by user42 on Thu May  9 22:37:41 2019");
        assert_eq!(creator.as_deref(), Some("user42"));
        assert_eq!(
            creation_datetime,
            Some(
                NaiveDate::from_ymd_opt(2019, 5, 9)
                    .unwrap()
                    .and_hms_opt(22, 37, 41)
                    .unwrap()
            )
        );
    }

    #[test]
    fn comment_parsing_allows_spaces_and_slashes_in_the_creator() {
        let (creator, _) = parse_creation_comment(
            "created by crates.io/crates/surface on Sat May 22 07:52:53 2021",
        );
        assert_eq!(creator.as_deref(), Some("crates.io/crates/surface"));

        let (creator, _) =
            parse_creation_comment("created by log on daemon on Sat May 22 07:52:53 2021");
        assert_eq!(creator.as_deref(), Some("log on daemon"));
    }

    #[test]
    fn malformed_comment_yields_no_metadata() {
        assert_eq!(parse_creation_comment("reconstructed yesterday"), (None, None));
        assert_eq!(
            parse_creation_comment("created by tester on not a timestamp"),
            (None, None)
        );
    }

    #[test]
    fn write_produces_exact_bytes() {
        let mut written = Vec::new();
        write_surface(&sample_surface(), pinned_timestamp(), &mut written).unwrap();
        assert_eq!(written, sample_bytes());
    }

    #[test]
    fn read_decodes_every_section() {
        let surface = read_surface(&sample_bytes()[..]).unwrap();

        assert_eq!(surface.creator.as_deref(), Some("tester"));
        assert_eq!(surface.creation_datetime, Some(pinned_timestamp()));
        assert_eq!(surface.vertex_count(), 3);
        assert_eq!(surface.vertices[1], Vertex::new(4.0, 5.0, 6.0));
        assert_eq!(surface.triangles, vec![Triangle::new([0, 1, 2])]);
        assert!(surface.using_old_real_ras);
        assert_eq!(
            surface.volume_geometry_info,
            Some(short_geometry_lines())
        );
        assert_eq!(surface.command_lines, vec!["recon -x".to_string()]);
    }

    #[test]
    fn roundtrip_through_a_file() {
        let original = sample_surface();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lh.pial");

        save_triangular_with_timestamp(&original, &path, pinned_timestamp()).unwrap();
        let loaded = load_triangular(&path).unwrap();

        assert_eq!(loaded.vertices, original.vertices);
        assert_eq!(loaded.triangles, original.triangles);
        assert_eq!(loaded.creator, original.creator);
        assert_eq!(loaded.creation_datetime, Some(pinned_timestamp()));
        assert_eq!(loaded.using_old_real_ras, original.using_old_real_ras);
        assert_eq!(loaded.volume_geometry_info, original.volume_geometry_info);
        assert_eq!(loaded.command_lines, original.command_lines);
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_triangular("nonexistent_surface_12345");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn rejects_wrong_magic() {
        let result = read_surface(&b"\xff\xff\xffrest does not matter"[..]);
        assert!(matches!(
            result,
            Err(IoError::UnsupportedMagic {
                magic: [0xff, 0xff, 0xff],
            })
        ));
    }

    #[test]
    fn rejects_triangle_corner_beyond_vertex_count() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0xff, 0xff, 0xfe]);
        bytes.extend_from_slice(b"created by tester on Sat May 22 07:52:53 2021\n\n");
        bytes.extend_from_slice(&1_u32.to_be_bytes());
        bytes.extend_from_slice(&1_u32.to_be_bytes());
        for coordinate in [0.0_f32, 0.0, 0.0] {
            bytes.extend_from_slice(&coordinate.to_be_bytes());
        }
        for corner in [0_u32, 0, 1] {
            bytes.extend_from_slice(&corner.to_be_bytes());
        }

        assert!(matches!(
            read_surface(&bytes[..]),
            Err(IoError::InvalidContent { .. })
        ));
    }

    #[test]
    fn rejects_unknown_tag() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0xff, 0xff, 0xfe]);
        bytes.extend_from_slice(b"created by tester on Sat May 22 07:52:53 2021\n\n");
        bytes.extend_from_slice(&0_u32.to_be_bytes());
        bytes.extend_from_slice(&0_u32.to_be_bytes());
        bytes.extend_from_slice(&99_u32.to_be_bytes());

        assert!(matches!(
            read_surface(&bytes[..]),
            Err(IoError::InvalidContent { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_real_ras_flag() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0xff, 0xff, 0xfe]);
        bytes.extend_from_slice(b"created by tester on Sat May 22 07:52:53 2021\n\n");
        bytes.extend_from_slice(&0_u32.to_be_bytes());
        bytes.extend_from_slice(&0_u32.to_be_bytes());
        bytes.extend_from_slice(&TAG_USING_OLD_REAL_RAS.to_be_bytes());
        bytes.extend_from_slice(&7_u32.to_be_bytes());

        assert!(matches!(
            read_surface(&bytes[..]),
            Err(IoError::InvalidContent { .. })
        ));
    }

    #[test]
    fn truncated_vertex_data_reports_eof() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0xff, 0xff, 0xfe]);
        bytes.extend_from_slice(b"created by tester on Sat May 22 07:52:53 2021\n\n");
        bytes.extend_from_slice(&1_u32.to_be_bytes());
        bytes.extend_from_slice(&0_u32.to_be_bytes());
        bytes.extend_from_slice(&0.5_f32.to_be_bytes());

        assert!(matches!(
            read_surface(&bytes[..]),
            Err(IoError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn save_requires_volume_geometry() {
        let mut surface = sample_surface();
        surface.volume_geometry_info = None;
        let mut written = Vec::new();

        assert!(matches!(
            write_surface(&surface, pinned_timestamp(), &mut written),
            Err(IoError::MissingVolumeGeometry)
        ));
        assert!(written.is_empty());
    }

    #[test]
    fn default_creator_fills_the_comment() {
        let mut surface = sample_surface();
        surface.creator = None;
        let mut written = Vec::new();
        write_surface(&surface, pinned_timestamp(), &mut written).unwrap();

        let reloaded = read_surface(&written[..]).unwrap();
        assert_eq!(
            reloaded.creator.as_deref(),
            Some("crates.io/crates/surface")
        );
    }
}
