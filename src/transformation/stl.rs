//! Reading and writing of STL (stereolithography) triangle soups.
//!
//! Both the binary and the ASCII flavors are supported. Triangles are written in
//! the order they are given, with their vertex order untouched, so the winding of
//! every face survives the round-trip.

use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;
use crate::transformation::ReliefError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

const HEADER_LEN: usize = 80;
const FACET_LEN: usize = 50;

/// The flavor of an STL file.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StlFormat {
    /// The compact little-endian binary layout.
    #[default]
    Binary,
    /// The human-readable `solid ... endsolid` layout.
    Ascii,
}

fn facet_normal(tri: &Triangle) -> Vector<Real> {
    tri.normal().map(|n| n.into_inner()).unwrap_or_else(Vector::zeros)
}

/// Writes `triangles` as an STL stream.
///
/// The facet normals are recomputed from the vertex order (right-hand rule); a
/// degenerate triangle gets a zero normal. `name` fills the binary header
/// (truncated to 80 bytes) or the ASCII `solid` line.
pub fn write_stl<W: Write>(
    triangles: &[Triangle],
    out: &mut W,
    format: StlFormat,
    name: &str,
) -> io::Result<()> {
    match format {
        StlFormat::Binary => write_binary(triangles, out, name),
        StlFormat::Ascii => write_ascii(triangles, out, name),
    }
}

#[allow(clippy::unnecessary_cast)]
fn write_binary<W: Write>(triangles: &[Triangle], out: &mut W, name: &str) -> io::Result<()> {
    let count = u32::try_from(triangles.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "too many triangles for a binary STL file",
        )
    })?;

    let mut header = [0u8; HEADER_LEN];
    let name_bytes = name.as_bytes();
    let copy_n = name_bytes.len().min(HEADER_LEN);
    header[..copy_n].copy_from_slice(&name_bytes[..copy_n]);
    out.write_all(&header)?;
    out.write_all(&count.to_le_bytes())?;

    let mut facet = [0u8; FACET_LEN];
    for tri in triangles {
        let n = facet_normal(tri);
        let coords = [n.x, n.y, n.z]
            .into_iter()
            .chain(tri.vertices().into_iter().flat_map(|p| [p.x, p.y, p.z]));

        for (k, value) in coords.enumerate() {
            facet[k * 4..k * 4 + 4].copy_from_slice(&(value as f32).to_le_bytes());
        }
        // Attribute byte count, always zero.
        facet[48..].copy_from_slice(&0u16.to_le_bytes());
        out.write_all(&facet)?;
    }

    Ok(())
}

fn write_ascii<W: Write>(triangles: &[Triangle], out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "solid {name}")?;
    for tri in triangles {
        let n = facet_normal(tri);
        writeln!(out, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(out, "    outer loop")?;
        for p in tri.vertices() {
            writeln!(out, "      vertex {} {} {}", p.x, p.y, p.z)?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }
    writeln!(out, "endsolid {name}")
}

/// Reads an STL stream, binary or ASCII.
///
/// A stream whose length matches the binary layout announced by its header is
/// read as binary, even if its header starts with `solid`. Any other stream must
/// be ASCII. The facet normals stored in the stream are ignored.
pub fn read_stl<R: Read>(input: &mut R) -> Result<Vec<Triangle>, ReliefError> {
    let mut bytes = Vec::new();
    let _ = input.read_to_end(&mut bytes)?;

    if let Some(count) = binary_facet_count(&bytes) {
        return Ok(read_binary(&bytes[HEADER_LEN + 4..], count));
    }

    let text = core::str::from_utf8(&bytes)
        .map_err(|_| ReliefError::MalformedStl("neither binary nor ASCII STL data".to_string()))?;
    read_ascii(text)
}

fn binary_facet_count(bytes: &[u8]) -> Option<usize> {
    let count_bytes: [u8; 4] = bytes.get(HEADER_LEN..HEADER_LEN + 4)?.try_into().ok()?;
    let count = u32::from_le_bytes(count_bytes) as usize;
    let expected = count.checked_mul(FACET_LEN)?.checked_add(HEADER_LEN + 4)?;
    (expected == bytes.len()).then_some(count)
}

fn read_binary(facets: &[u8], count: usize) -> Vec<Triangle> {
    let read_f32 = |chunk: &[u8], k: usize| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&chunk[k * 4..k * 4 + 4]);
        Real::from(f32::from_le_bytes(buf))
    };

    facets
        .chunks_exact(FACET_LEN)
        .take(count)
        .map(|facet| {
            // Skip the three components of the stored normal.
            let pt = |v: usize| {
                Point::new(
                    read_f32(facet, 3 + v * 3),
                    read_f32(facet, 4 + v * 3),
                    read_f32(facet, 5 + v * 3),
                )
            };
            Triangle::new(pt(0), pt(1), pt(2))
        })
        .collect()
}

fn read_ascii(text: &str) -> Result<Vec<Triangle>, ReliefError> {
    let mut tokens = text.split_whitespace();
    if tokens.next() != Some("solid") {
        return Err(ReliefError::MalformedStl(
            "ASCII data must start with `solid`".to_string(),
        ));
    }

    let mut vertices = Vec::new();
    let mut facets = 0;
    while let Some(token) = tokens.next() {
        match token {
            "facet" => facets += 1,
            "vertex" => {
                let mut coord = || -> Result<Real, ReliefError> {
                    let token = tokens.next().ok_or_else(|| {
                        ReliefError::MalformedStl("truncated vertex".to_string())
                    })?;
                    token.parse::<Real>().map_err(|_| {
                        ReliefError::MalformedStl(format!("invalid coordinate `{token}`"))
                    })
                };
                let (x, y, z) = (coord()?, coord()?, coord()?);
                vertices.push(Point::new(x, y, z));
            }
            _ => {}
        }
    }

    if vertices.len() != facets * 3 {
        return Err(ReliefError::MalformedStl(format!(
            "{} vertices found for {facets} facets",
            vertices.len()
        )));
    }

    Ok(vertices
        .chunks_exact(3)
        .map(|v| Triangle::new(v[0], v[1], v[2]))
        .collect())
}

/// Writes `triangles` into a new STL file at `path`.
pub fn write_stl_file(
    path: &Path,
    triangles: &[Triangle],
    format: StlFormat,
    name: &str,
) -> Result<(), ReliefError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_stl(triangles, &mut out, format, name)?;
    out.flush()?;
    Ok(())
}

/// Reads the triangles of the STL file at `path`.
pub fn read_stl_file(path: &Path) -> Result<Vec<Triangle>, ReliefError> {
    let mut input = BufReader::new(File::open(path)?);
    read_stl(&mut input)
}
