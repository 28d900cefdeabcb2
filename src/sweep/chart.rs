//! Plot-ready data derived from a sweep.

/// One named curve sharing a chart's x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Several curves over one x axis, with the labels to draw them under.
///
/// Rendering is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub series: Vec<Series>,
}

impl Chart {
    /// Number of points on the x axis.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Row `index` as `[x, y_1, ..., y_n]`.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        let x = *self.x.get(index)?;
        let mut row = Vec::with_capacity(self.series.len() + 1);
        row.push(x);
        for series in &self.series {
            row.push(*series.values.get(index)?);
        }
        Some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let chart = Chart {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            x: vec![1.0, 2.0],
            series: vec![Series::new("a", vec![3.0, 4.0]), Series::new("b", vec![5.0])],
        };

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.row(0), Some(vec![1.0, 3.0, 5.0]));
        // ragged series end the table
        assert_eq!(chart.row(1), None);
        assert_eq!(chart.row(2), None);
    }
}
