// src/chart/mod.rs — plotly.js figure model
//
// Only the slice of the plotly schema the dashboard uses. Serializes to the
// `{data, layout}` document `Plotly.newPlot` accepts.

use serde::Serialize;

use crate::data::{Cell, Num};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(title: &str, data: Vec<Trace>) -> Self {
        Self {
            data,
            layout: Layout::new(title),
        }
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.data.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.data.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: String,
    pub x: Vec<u16>,
    pub y: Vec<Num>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackgroup: Option<String>,
    /// Axis id (`y`, `y2`); plotly puts traces without one on `y`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectgaps: Option<bool>,
}

impl Trace {
    fn scatter(name: &str, x: Vec<u16>, y: Vec<Num>) -> Self {
        Self {
            kind: TraceKind::Scatter,
            name: name.to_string(),
            x,
            y,
            mode: None,
            stackgroup: None,
            yaxis: None,
            marker: None,
            connectgaps: None,
        }
    }

    /// Line over every year; absent cells stay `null` and are not bridged.
    pub fn line(name: &str, column: &[(u16, Cell)]) -> Self {
        let (x, y) = split(column);
        let mut trace = Self::scatter(name, x, y);
        trace.mode = Some("lines".into());
        trace.connectgaps = Some(false);
        trace
    }

    /// Stacked area member. Absent years are dropped from x and y: plotly
    /// stacking fills a `null` with zero, which would draw a false point.
    pub fn stacked_area(name: &str, column: &[(u16, Cell)], group: &str) -> Self {
        let present: Vec<(u16, Cell)> = column
            .iter()
            .filter(|(_, v)| v.is_some())
            .copied()
            .collect();
        let (x, y) = split(&present);
        let mut trace = Self::scatter(name, x, y);
        trace.mode = Some("lines".into());
        trace.stackgroup = Some(group.to_string());
        trace
    }

    pub fn bar(name: &str, column: &[(u16, Cell)]) -> Self {
        let (x, y) = split(column);
        Self {
            kind: TraceKind::Bar,
            ..Self::scatter(name, x, y)
        }
    }

    pub fn with_mode(mut self, mode: &str) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    pub fn on_axis(mut self, axis: &str) -> Self {
        self.yaxis = Some(axis.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.marker = Some(Marker {
            color: MarkerColor::Single(color.to_string()),
            coloraxis: None,
        });
        self
    }

    /// Colour each point by its x value through a shared colour axis.
    pub fn color_by_x(mut self, coloraxis: &str) -> Self {
        self.marker = Some(Marker {
            color: MarkerColor::PerPoint(self.x.iter().map(|&x| f64::from(x)).collect()),
            coloraxis: Some(coloraxis.to_string()),
        });
        self
    }

    /// The x values that carry a plotted point.
    pub fn plotted_x(&self) -> Vec<u16> {
        self.x
            .iter()
            .zip(&self.y)
            .filter(|(_, y)| y.0.is_some())
            .map(|(x, _)| *x)
            .collect()
    }

    pub fn y_at(&self, x: u16) -> Cell {
        self.x
            .iter()
            .position(|&v| v == x)
            .and_then(|i| self.y.get(i))
            .and_then(|n| n.0)
    }
}

fn split(column: &[(u16, Cell)]) -> (Vec<u16>, Vec<Num>) {
    column.iter().map(|&(x, y)| (x, Num(y))).unzip()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: MarkerColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
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

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: text.into(),
            side: None,
            overlaying: None,
        }
    }

    pub fn side(mut self, side: &str) -> Self {
        self.side = Some(side.to_string());
        self
    }

    pub fn overlaying(mut self, axis: &str) -> Self {
        self.overlaying = Some(axis.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAxis {
    /// `[position, colour]` stops, positions rising from 0 to 1.
    pub colorscale: Vec<(f64, String)>,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<ColorAxis>,
}

impl Layout {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.into(),
            xaxis: Axis::titled("Year"),
            yaxis: Axis::titled("value"),
            yaxis2: None,
            legend: None,
            coloraxis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn column() -> Vec<(u16, Cell)> {
        vec![(2019, Some(3.0)), (2018, Some(2.5)), (2017, None)]
    }

    #[test]
    fn test_line_keeps_gap_as_null() {
        let t = Trace::line("a", &column());
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(
            v,
            json!({
                "type": "scatter",
                "name": "a",
                "x": [2019, 2018, 2017],
                "y": [3, 2.5, null],
                "mode": "lines",
                "connectgaps": false
            })
        );
        assert_eq!(t.plotted_x(), vec![2019, 2018]);
    }

    #[test]
    fn test_stacked_area_drops_absent() {
        let t = Trace::stacked_area("a", &column(), "one");
        assert_eq!(t.x, vec![2019, 2018]);
        assert_eq!(t.y_at(2017), None);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["stackgroup"], "one");
    }

    #[test]
    fn test_bar_axis_and_color() {
        let t = Trace::bar("b", &column()).on_axis("y2").with_color("skyblue");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["type"], "bar");
        assert_eq!(v["yaxis"], "y2");
        assert_eq!(v["marker"], json!({"color": "skyblue"}));
        assert!(v.get("mode").is_none());
    }

    #[test]
    fn test_color_by_x() {
        let t = Trace::bar("b", &column()).color_by_x("coloraxis");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(
            v["marker"],
            json!({"color": [2019.0, 2018.0, 2017.0], "coloraxis": "coloraxis"})
        );
    }

    #[test]
    fn test_layout_defaults() {
        let fig = Figure::new("T", vec![Trace::line("a", &column())]);
        let v = serde_json::to_value(&fig).unwrap();
        assert_eq!(v["layout"]["title"]["text"], "T");
        assert_eq!(v["layout"]["xaxis"]["title"]["text"], "Year");
        assert!(v["layout"].get("yaxis2").is_none());
        assert_eq!(fig.series_names(), vec!["a"]);
        assert!(fig.trace("missing").is_none());
    }
}
