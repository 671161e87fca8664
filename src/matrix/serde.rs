use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeStruct,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::SparseMatrix;

const FIELDS: &[&str] = &["rows", "cols", "entries"];

impl Serialize for SparseMatrix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<(usize, usize, i64)> = self
            .entries()
            .map(|((row, col), value)| (row, col, value))
            .collect();
        let mut state = serializer.serialize_struct("SparseMatrix", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Rows,
    Cols,
    Entries,
}

struct SparseMatrixVisitor;

impl<'de> Visitor<'de> for SparseMatrixVisitor {
    type Value = SparseMatrix;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sparse matrix with rows, cols and entries")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut rows: Option<usize> = None;
        let mut cols: Option<usize> = None;
        let mut entries: Option<Vec<(usize, usize, i64)>> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Rows => {
                    if rows.is_some() {
                        return Err(de::Error::duplicate_field("rows"));
                    }
                    rows = Some(map.next_value()?);
                }
                Field::Cols => {
                    if cols.is_some() {
                        return Err(de::Error::duplicate_field("cols"));
                    }
                    cols = Some(map.next_value()?);
                }
                Field::Entries => {
                    if entries.is_some() {
                        return Err(de::Error::duplicate_field("entries"));
                    }
                    entries = Some(map.next_value()?);
                }
            }
        }
        let rows = rows.ok_or_else(|| de::Error::missing_field("rows"))?;
        let cols = cols.ok_or_else(|| de::Error::missing_field("cols"))?;

        SparseMatrix::from_triples(rows, cols, entries.unwrap_or_default())
            .map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for SparseMatrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("SparseMatrix", FIELDS, SparseMatrixVisitor)
    }
}
