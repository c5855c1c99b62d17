use ndarray::prelude::*;

use crate::error::Error;

/// How a column's values are represented. Resolved once when the schema is
/// built, so row access is a bounds check plus a kind check, no per-access
/// type dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Real-valued attribute column.
    Numeric,
    /// Categorical column; values are indices into `labels`.
    Nominal { labels: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }
}

/// Column layout of the generated stream: `num_attributes` numeric columns
/// named "att 1".."att N" followed by one nominal "class" column. Fixed for
/// the lifetime of a generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(num_attributes: usize, num_classes: usize) -> Self {
        let mut columns: Vec<Column> = (1..=num_attributes)
            .map(|i| Column {
                name: format!("att {}", i),
                kind: ColumnKind::Numeric,
            })
            .collect();
        columns.push(Column {
            name: "class".to_string(),
            kind: ColumnKind::Nominal {
                labels: (1..=num_classes).map(|i| format!("class {}", i)).collect(),
            },
        });
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// One generated observation: the attribute values with the class index of
/// the centroid that produced them. Rows are plain values; they keep a copy
/// of the blended attribute data and no reference to the model.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    attributes: Array1<f64>,
    class_index: usize,
}

impl Row {
    pub(crate) fn new(attributes: Array1<f64>, class_index: usize) -> Self {
        Self {
            attributes,
            class_index,
        }
    }

    /// Attribute columns plus the class column.
    pub fn num_columns(&self) -> usize {
        self.attributes.len() + 1
    }

    /// The numeric value of an attribute column.
    pub fn numeric(&self, column: usize) -> Result<f64, Error> {
        if column < self.attributes.len() {
            Ok(self.attributes[column])
        } else {
            Err(Error::InvalidColumnAccess {
                column,
                requested: "numeric",
            })
        }
    }

    /// The category index of the class column.
    pub fn class_index(&self, column: usize) -> Result<usize, Error> {
        if column == self.attributes.len() {
            Ok(self.class_index)
        } else {
            Err(Error::InvalidColumnAccess {
                column,
                requested: "nominal",
            })
        }
    }

    pub fn attributes(&self) -> ArrayView1<f64> {
        self.attributes.view()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_schema_layout() {
        let schema = Schema::new(3, 2);
        assert_eq!(schema.num_columns(), 4);
        assert_eq!(schema.columns()[0].name(), "att 1");
        assert_eq!(schema.columns()[2].name(), "att 3");
        assert_eq!(schema.columns()[0].kind(), &ColumnKind::Numeric);
        let class = &schema.columns()[3];
        assert_eq!(class.name(), "class");
        assert_eq!(
            class.kind(),
            &ColumnKind::Nominal {
                labels: vec!["class 1".to_string(), "class 2".to_string()]
            }
        );
    }

    #[test]
    fn test_row_access() {
        let row = Row::new(array![0.5, -0.25], 1);
        assert_eq!(row.num_columns(), 3);
        assert_eq!(row.numeric(0), Ok(0.5));
        assert_eq!(row.numeric(1), Ok(-0.25));
        assert_eq!(row.class_index(2), Ok(1));
    }

    #[test]
    fn test_mismatched_access_rejected() {
        let row = Row::new(array![0.5, -0.25], 1);
        // numeric access to the class column
        assert_eq!(
            row.numeric(2),
            Err(Error::InvalidColumnAccess {
                column: 2,
                requested: "numeric"
            })
        );
        // nominal access to an attribute column
        assert_eq!(
            row.class_index(0),
            Err(Error::InvalidColumnAccess {
                column: 0,
                requested: "nominal"
            })
        );
        // out of range entirely
        assert!(row.numeric(3).is_err());
        assert!(row.class_index(3).is_err());
    }
}
