use serde::{Deserialize, Serialize};

/// A declarative line chart in Plotly's figure format (`{ data, layout }`).
///
/// The browser hands this straight to `Plotly.react`; nothing here knows how
/// to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartDescription {
    /// True when no trace has any point.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|t| t.x.is_empty())
    }

    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.data.iter().find(|t| t.name == name)
    }
}

/// One `scatter` trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub line: LineStyle,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tickmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dtick: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ticktext: Option<Vec<String>>,
}
