//! SVG file loading
//!
//! Pulls the path data out of an SVG document and runs it through the
//! sampler. Only the first `<path>` element with a `d` attribute is used.

use crate::sampler::{PathSampler, SamplerOptions};
use epicycles_core::{PathError, Result, SampledPath};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static PATH_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<path\s+([^>]+)>"#).expect("invalid path regex"));
static D_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)d\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("invalid d regex")
});

/// Extract the `d` attribute of the first `<path>` element that has one
///
/// Whitespace runs inside the attribute (wrapped lines, tabs) are collapsed
/// to single spaces so operand lists survive line breaks.
pub fn extract_path_data(svg_text: &str) -> std::result::Result<String, PathError> {
    PATH_ELEMENT
        .captures_iter(svg_text)
        .find_map(|element| {
            let caps = D_ATTRIBUTE.captures(element.get(1)?.as_str())?;
            let d = caps.get(1).or_else(|| caps.get(2))?.as_str();
            let d = d.split_whitespace().collect::<Vec<_>>().join(" ");
            (!d.is_empty()).then_some(d)
        })
        .ok_or(PathError::NoPathElement)
}

/// Load an SVG file, sample its path and normalize it
///
/// Samples are scaled by `scale` and shifted so the first one sits on the
/// origin.
pub fn load_svg<P: AsRef<Path>>(
    file_path: P,
    scale: f64,
    options: SamplerOptions,
) -> Result<SampledPath> {
    let file_path = file_path.as_ref();
    let content = std::fs::read_to_string(file_path)?;
    let path_data = extract_path_data(&content)?;
    debug!(
        file = %file_path.display(),
        length = path_data.len(),
        "extracted path data"
    );

    let sampled = PathSampler::new(options).sample(&path_data)?;
    info!(
        file = %file_path.display(),
        samples = sampled.len(),
        scale,
        "loaded SVG path"
    );
    Ok(sampled.normalized(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_d_attribute() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <path fill="none" d="M0 0 L10 0" stroke="black"/>
</svg>"#;
        assert_eq!(extract_path_data(svg).unwrap(), "M0 0 L10 0");
    }

    #[test]
    fn test_single_quotes_and_id() {
        let svg = "<svg><path id='p1' d='M1 1 h2'/></svg>";
        assert_eq!(extract_path_data(svg).unwrap(), "M1 1 h2");
    }

    #[test]
    fn test_skips_paths_without_data() {
        let svg = r#"<svg><path class="a"/><path d="M2 2 V5"/></svg>"#;
        assert_eq!(extract_path_data(svg).unwrap(), "M2 2 V5");

        let svg = r#"<svg><path d=""/><path d="  "/><path d="M3 3 H1"/></svg>"#;
        assert_eq!(extract_path_data(svg).unwrap(), "M3 3 H1");
    }

    #[test]
    fn test_wrapped_path_data_keeps_operands() {
        let svg = "<svg><path d=\"M0 0 L10 0\n    10 10\t0 10\r\n\"/></svg>";
        let data = extract_path_data(svg).unwrap();
        assert_eq!(data, "M0 0 L10 0 10 10 0 10");

        let wrapped = PathSampler::default().sample(&data).unwrap();
        let single = PathSampler::default()
            .sample("M0 0 L10 0 10 10 0 10")
            .unwrap();
        assert_eq!(wrapped.len(), 301);
        assert_eq!(wrapped, single);
    }

    #[test]
    fn test_no_path() {
        assert_eq!(
            extract_path_data("<svg><rect/></svg>"),
            Err(PathError::NoPathElement)
        );
        assert_eq!(
            extract_path_data(r#"<svg><path d=""/></svg>"#),
            Err(PathError::NoPathElement)
        );
    }
}
