use crate::errors::TonewheelError;
use crate::float_types::Real;
use crate::io::{ExportOptions, write_atomically};
use crate::profile::Contour;
use nalgebra::Point2;
use std::io::Cursor;
use std::path::Path;

use dxf::{Drawing, LwPolylineVertex};
use dxf::entities::*;
use dxf::enums::AcadVersion;

/// Lightweight polylines need at least R14; R2000 is what most CAM tools expect.
const DRAWING_VERSION: AcadVersion = AcadVersion::R2000;

#[inline]
fn origin() -> dxf::Point {
    dxf::Point::new(0.0, 0.0, 0.0)
}

#[doc = " Build the drawing for `contour`."]
#[doc = ""]
#[doc = " The model space holds, in order:"]
#[doc = " - one lightweight polyline through every contour point, closed when `options.closed`"]
#[doc = " - one circle of radius `options.center_bore_radius` at the origin"]
#[doc = " - one point at the origin when `options.include_origin_marker`"]
#[allow(clippy::unnecessary_cast)]
pub fn to_drawing(contour: &Contour, options: &ExportOptions) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = DRAWING_VERSION;

    let mut outline = LwPolyline::default();
    outline.vertices = contour
        .points()
        .iter()
        .map(|p| LwPolylineVertex {
            x: p.x as f64,
            y: p.y as f64,
            ..Default::default()
        })
        .collect();
    outline.set_is_closed(options.closed);
    drawing.add_entity(Entity::new(EntityType::LwPolyline(outline)));

    let bore = Circle::new(origin(), options.center_bore_radius as f64);
    drawing.add_entity(Entity::new(EntityType::Circle(bore)));

    if options.include_origin_marker {
        drawing.add_entity(Entity::new(EntityType::ModelPoint(ModelPoint::new(origin()))));
    }

    drawing
}

#[doc = " Render `contour` to DXF bytes."]
pub fn to_dxf(contour: &Contour, options: &ExportOptions) -> Result<Vec<u8>, TonewheelError> {
    let drawing = to_drawing(contour, options);
    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

#[doc = " Write `contour` to `destination`, replacing any existing file."]
#[doc = ""]
#[doc = " The drawing is rendered fully in memory before the file system is touched;"]
#[doc = " a failed write leaves no partial file and keeps a pre-existing one intact."]
pub fn export(
    contour: Contour,
    options: &ExportOptions,
    destination: impl AsRef<Path>,
) -> Result<(), TonewheelError> {
    let destination = destination.as_ref();
    let bytes = to_dxf(&contour, options)?;
    write_atomically(destination, &bytes)?;
    log::info!(
        "exported {} outline with {} vertices to {}",
        if options.closed { "closed" } else { "open" },
        contour.len(),
        destination.display()
    );
    Ok(())
}

/// What [`read_dxf_outline`] recovers from a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DxfOutline {
    /// Vertices of the first lightweight polyline.
    pub contour: Contour,
    pub closed: bool,
    /// Radius of the first circle centered at the origin.
    pub bore_radius: Option<Real>,
    pub has_origin_marker: bool,
    /// Total number of entities in the drawing.
    pub entity_count: usize,
}

#[doc = " Read back an outline written by [`export`] or [`to_dxf`]."]
pub fn read_dxf_outline(dxf_data: &[u8]) -> Result<DxfOutline, TonewheelError> {
    let drawing = Drawing::load(&mut Cursor::new(dxf_data))?;

    let mut polyline: Option<(Contour, bool)> = None;
    let mut bore_radius = None;
    let mut has_origin_marker = false;
    let mut entity_count = 0;

    for entity in drawing.entities() {
        entity_count += 1;
        match &entity.specific {
            EntityType::LwPolyline(outline) if polyline.is_none() => {
                let points = outline
                    .vertices
                    .iter()
                    .map(|v| Point2::new(v.x as Real, v.y as Real))
                    .collect();
                polyline = Some((Contour::from_points(points), outline.is_closed()));
            },
            EntityType::Circle(circle) if bore_radius.is_none() && circle.center == origin() => {
                bore_radius = Some(circle.radius as Real);
            },
            EntityType::ModelPoint(point) if point.location == origin() => {
                has_origin_marker = true;
            },
            _ => {},
        }
    }

    let (contour, closed) =
        polyline.unwrap_or_else(|| (Contour::from_points(Vec::new()), false));

    Ok(DxfOutline {
        contour,
        closed,
        bore_radius,
        has_origin_marker,
        entity_count,
    })
}

impl Contour {
    pub fn to_dxf(&self, options: &ExportOptions) -> Result<Vec<u8>, TonewheelError> {
        self::to_dxf(self, options)
    }

    pub fn export_dxf(
        self,
        options: &ExportOptions,
        destination: impl AsRef<Path>,
    ) -> Result<(), TonewheelError> {
        self::export(self, options, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ProfileConfig, build_profile};
    use crate::waveform::WaveShape;
    use approx::assert_relative_eq;

    fn small_wheel() -> Contour {
        let config = ProfileConfig::new(8, 6, 10.0, 0.1, WaveShape::Sine).unwrap();
        build_profile(&config).unwrap()
    }

    #[test]
    fn drawing_has_outline_bore_and_marker() {
        let contour = small_wheel();
        let bytes = to_dxf(&contour, &ExportOptions::default()).unwrap();
        let outline = read_dxf_outline(&bytes).unwrap();

        assert_eq!(outline.entity_count, 3);
        assert!(outline.closed);
        assert!(outline.has_origin_marker);
        assert_relative_eq!(outline.bore_radius.unwrap(), 2.875);
        assert_eq!(outline.contour.len(), 48);
        for (read, written) in outline.contour.points().iter().zip(contour.points()) {
            assert_relative_eq!(read.x, written.x, epsilon = 1e-6);
            assert_relative_eq!(read.y, written.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn tooth_outline_is_open() {
        let bytes = to_dxf(&small_wheel(), &ExportOptions::tooth()).unwrap();
        let outline = read_dxf_outline(&bytes).unwrap();
        assert!(!outline.closed);
    }

    #[test]
    fn origin_marker_can_be_left_out() {
        let options = ExportOptions {
            include_origin_marker: false,
            ..Default::default()
        };
        let bytes = to_dxf(&small_wheel(), &options).unwrap();
        let outline = read_dxf_outline(&bytes).unwrap();
        assert_eq!(outline.entity_count, 2);
        assert!(!outline.has_origin_marker);
    }

    #[test]
    fn drawing_version_supports_lightweight_polylines() {
        let drawing = to_drawing(&small_wheel(), &ExportOptions::default());
        assert_eq!(drawing.header.version, AcadVersion::R2000);
    }
}
