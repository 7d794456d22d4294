//! Colortable listing for annotation files.

use std::path::Path;

use anyhow::{Context, Result};
use surface::annot::Annotation;
use surface::io::load_annotation;

/// Print one delimited row per colortable label, ordered by label index.
pub fn run(annotation_path: &Path, delimiter: &str) -> Result<()> {
    let annotation = load_annotation(annotation_path)
        .with_context(|| format!("failed to read {}", annotation_path.display()))?;
    for row in rows(&annotation, delimiter) {
        println!("{row}");
    }
    Ok(())
}

/// Render the header and one row per label.
fn rows(annotation: &Annotation, delimiter: &str) -> Vec<String> {
    let mut labels: Vec<_> = annotation.labels().values().collect();
    labels.sort_by_key(|label| label.index);

    let mut rows = vec![["index", "color", "name"].join(delimiter)];
    rows.extend(labels.into_iter().map(|label| {
        format!(
            "{}{delimiter}{}{delimiter}{}",
            label.index,
            label.hex_color_code(),
            label.name
        )
    }));
    rows
}

#[cfg(test)]
mod tests {
    use surface::annot::Label;

    use super::*;

    fn sample_annotation() -> Annotation {
        let labels = [
            Label {
                index: 24,
                name: "precentral".to_string(),
                red: 60,
                green: 20,
                blue: 220,
                transparency: 0,
            },
            Label {
                index: 0,
                name: "unknown".to_string(),
                red: 25,
                green: 5,
                blue: 25,
                transparency: 0,
            },
        ];
        Annotation::from_parts([], None, labels).unwrap()
    }

    #[test]
    fn rows_are_sorted_by_label_index() {
        assert_eq!(
            rows(&sample_annotation(), "\t"),
            [
                "index\tcolor\tname",
                "0\t#190519\tunknown",
                "24\t#3c14dc\tprecentral",
            ]
        );
    }

    #[test]
    fn delimiter_is_configurable() {
        let rendered = rows(&sample_annotation(), ",");
        assert_eq!(rendered[0], "index,color,name");
        assert_eq!(rendered[2], "24,#3c14dc,precentral");
    }
}
