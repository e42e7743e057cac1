//! SVG document emission for a rendered strip.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::palette::{grey_hex, Palette};
use super::patch::Patch;
use super::transform::VIEWBOX_SIZE;
use crate::error::{BrandError, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// Nominal pixel size written on the root element.
const DISPLAY_SIZE: &str = "256";

const UNDERSIDE_OPACITY: &str = "0.9";
const TOPSIDE_OPACITY: &str = "1.0";
const HIGHLIGHT_OPACITY: &str = "0.25";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: String,
    pub description: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Ultrathink Möbius Strip Icon".to_string(),
            description: "Professional 3D Möbius strip icon for the Ultrathink blog.".to_string(),
        }
    }
}

struct SvgWriter {
    w: Writer<Vec<u8>>,
}

impl SvgWriter {
    fn new() -> Self {
        Self { w: Writer::new_with_indent(Vec::new(), b' ', 2) }
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut el = BytesStart::new(name);
        el.extend_attributes(attrs.iter().copied());
        self.w.write_event(Event::Start(el))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut el = BytesStart::new(name);
        el.extend_attributes(attrs.iter().copied());
        self.w.write_event(Event::Empty(el))?;
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.w.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.open(name, attrs)?;
        self.w.write_event(Event::Text(BytesText::new(text)))?;
        self.close(name)
    }

    fn stop(&mut self, offset: &str, color: &str, opacity: Option<&str>) -> Result<()> {
        match opacity {
            Some(o) => self.empty("stop", &[("offset", offset), ("stop-color", color), ("stop-opacity", o)]),
            None => self.empty("stop", &[("offset", offset), ("stop-color", color)]),
        }
    }

    fn finish(self) -> Result<String> {
        let mut out = String::from_utf8(self.w.into_inner())
            .map_err(|e| BrandError::invalid("svg document", e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

fn write_defs(sw: &mut SvgWriter, palette: &Palette) -> Result<()> {
    sw.open("defs", &[])?;

    for (i, band) in palette.bands.iter().enumerate() {
        let id = format!("grad-{i}");
        sw.open(
            "linearGradient",
            &[
                ("id", id.as_str()),
                ("x1", "80"),
                ("y1", "20"),
                ("x2", "80"),
                ("y2", "140"),
                ("gradientUnits", "userSpaceOnUse"),
            ],
        )?;
        sw.stop("0", &grey_hex(band.top), None)?;
        sw.stop("0.5", &grey_hex(band.mid), None)?;
        sw.stop("1", &grey_hex(band.bottom), None)?;
        sw.close("linearGradient")?;
    }

    let highlight = grey_hex(palette.highlight);
    sw.open(
        "radialGradient",
        &[("id", "highlight"), ("cx", "75"), ("cy", "40"), ("r", "50"), ("gradientUnits", "userSpaceOnUse")],
    )?;
    sw.stop("0", &highlight, Some("0.4"))?;
    sw.stop("0.5", &highlight, Some("0.15"))?;
    sw.stop("1", &grey_hex(palette.base), Some("0"))?;
    sw.close("radialGradient")?;

    sw.open("filter", &[("id", "shadow"), ("x", "-50%"), ("y", "-50%"), ("width", "200%"), ("height", "200%")])?;
    sw.empty("feGaussianBlur", &[("in", "SourceAlpha"), ("stdDeviation", "4")])?;
    sw.empty("feOffset", &[("dx", "0"), ("dy", "5"), ("result", "offsetblur")])?;
    sw.open("feComponentTransfer", &[])?;
    sw.empty("feFuncA", &[("type", "linear"), ("slope", "0.08"), ("intercept", "0")])?;
    sw.close("feComponentTransfer")?;
    sw.open("feMerge", &[])?;
    sw.empty("feMergeNode", &[])?;
    sw.empty("feMergeNode", &[("in", "SourceGraphic")])?;
    sw.close("feMerge")?;
    sw.close("filter")?;

    sw.open(
        "radialGradient",
        &[("id", "shadow-gradient"), ("cx", "80"), ("cy", "125"), ("r", "50"), ("gradientUnits", "userSpaceOnUse")],
    )?;
    sw.stop("0", "#000000", Some("0.12"))?;
    sw.stop("0.5", "#000000", Some("0.06"))?;
    sw.stop("1", "#000000", Some("0"))?;
    sw.close("radialGradient")?;

    sw.close("defs")
}

/// Write the full document. `patches` must already be in draw order.
pub fn write_document(
    patches: &[Patch],
    highlights: &[&Patch],
    palette: &Palette,
    shading_band: impl Fn(f64) -> usize,
    labels: &Labels,
) -> Result<String> {
    let mut sw = SvgWriter::new();
    let view_box = format!("0 0 {VIEWBOX_SIZE} {VIEWBOX_SIZE}");
    sw.open(
        "svg",
        &[
            ("xmlns", SVG_NS),
            ("width", DISPLAY_SIZE),
            ("height", DISPLAY_SIZE),
            ("viewBox", view_box.as_str()),
            ("role", "img"),
            ("aria-labelledby", "title desc"),
        ],
    )?;
    sw.text_element("title", &[("id", "title")], &labels.title)?;
    sw.text_element("desc", &[("id", "desc")], &labels.description)?;
    write_defs(&mut sw, palette)?;

    sw.empty("ellipse", &[("cx", "80"), ("cy", "125"), ("rx", "45"), ("ry", "12"), ("fill", "url(#shadow-gradient)")])?;

    sw.open("g", &[("filter", "url(#shadow)")])?;
    let last_band = palette.band_count().saturating_sub(1);
    for p in patches {
        let d = p.path_data();
        let fill = format!("url(#grad-{})", shading_band(p.intensity).min(last_band));
        let opacity = if p.is_underside() { UNDERSIDE_OPACITY } else { TOPSIDE_OPACITY };
        sw.empty("path", &[("d", d.as_str()), ("fill", fill.as_str()), ("stroke", "none"), ("opacity", opacity)])?;
    }
    for p in highlights {
        let d = p.path_data();
        sw.empty("path", &[("d", d.as_str()), ("fill", "url(#highlight)"), ("opacity", HIGHLIGHT_OPACITY)])?;
    }
    sw.close("g")?;
    sw.close("svg")?;
    sw.finish()
}
