//! Builds the link shown in the README.
//!
//! Inline markdown and a Mermaid diagram side by side, stacked over the
//! Flexivis home page at 40%, next to an inline GeoJSON walk through Berlin.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example readme
//! ```

use flexivis_url::{LayoutNode, Resource, View, url};
use serde_json::json;

const SOME_MARKDOWN: &str = "
# Example

This markdown will be _included in the URL_ and **rendered into a view**!
";

const DIAGRAM: &str = "graph TD; classDef empty stroke:none,fill:none; \
S( ):::empty -->|structured URL spec in code| G[flexivis-url] -->|URL| B[Browser] \
-->|URL| F[Flexivis] -->|a nicely rendered view| B";

fn main() -> Result<(), flexivis_url::Error> {
    let walk = json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": [
                [13.3907, 52.5074],
                [13.3902, 52.5076],
                [13.3891, 52.5076],
                [13.3871, 52.5077],
                [13.3855, 52.5073],
                [13.3841, 52.5095],
                [13.3838, 52.5109],
                [13.3827, 52.5136],
                [13.3813, 52.5156],
                [13.3796, 52.5165],
                [13.3785, 52.5163]
            ]
        },
        "properties": {
            "stroke": "green",
            "id": 42,
            "title": "Berlin Walk",
            "description": "Represents GPS data collected during a hypothetical walk through Berlin.",
            "source": "handcrafted"
        }
    });

    let root = LayoutNode::side_by_side([
        LayoutNode::vertical_stack([
            LayoutNode::side_by_side([
                View::markdown("description", Resource::inline(SOME_MARKDOWN)),
                View::mermaid("diagram", Resource::inline(DIAGRAM)),
            ])?,
            View::iframe("flexivis", "https://flexivis.infrastruktur.link/")?.into(),
        ])?
        .occupying_percentage(40),
        View::map("a", Resource::inline(walk.to_string())).into(),
    ])?;

    println!("{}", url(&root));
    Ok(())
}
