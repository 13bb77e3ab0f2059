use std::fmt;

use serde::Serialize;

use crate::datum::DatumType;
use crate::model::TensorInfo;
use crate::shape::Shape;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Input,
    Output,
    Node,
}

/// One line of an introspection report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub name: String,
    /// `None` for node rows, which carry no tensor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    pub dtype: Option<DatumType>,
}

impl ReportRow {
    pub fn tensor(role: Role, tensor: &TensorInfo) -> ReportRow {
        ReportRow {
            role,
            index: tensor.index,
            name: tensor.name.clone(),
            shape: Some(tensor.shape.clone()),
            dtype: tensor.datum_type,
        }
    }

    pub fn node(name: &str) -> ReportRow {
        ReportRow { role: Role::Node, index: None, name: name.to_string(), shape: None, dtype: None }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--> ")?;
        if let Some(ix) = self.index {
            write!(f, "#{ix} ")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(shape) = &self.shape {
            write!(f, " {shape}")?;
            match self.dtype {
                Some(dt) => write!(f, " {dt}")?,
                None => write!(f, " unknown")?,
            }
        }
        Ok(())
    }
}

/// Rows in graph declaration order. Never sorted, never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct IntrospectionReport {
    pub rows: Vec<ReportRow>,
}

impl IntrospectionReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for IntrospectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
