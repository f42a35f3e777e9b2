use crate::error::Result;
use chrono::{DateTime, TimeZone};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;
use std::fmt;

/// Timestamp text format the gateway expects: offset form, no fractional
/// seconds (e.g. `2021-03-05T10:00:00-0500`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A gateway search request: an ordered collection of filter fields,
/// serialized as a `<search>` document. Insertion order is preserved in
/// the XML because the gateway may treat element order as significant.
///
/// No validation is done on field names or predicate combinations; the
/// gateway is the authority on what a well-formed search is and reports
/// problems through the error classifier at request time.
///
/// ```
/// use paygate::SearchQuery;
///
/// let mut query = SearchQuery::new();
/// query.add_text_field("email").contains("example.com");
/// query.add_range_field("amount").min(10.0).max(100.0);
/// let body = query.to_xml().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SearchQuery {
    fields: Vec<SearchField>,
}

/// One filter field, tagged by kind so each shape keeps its own setters
#[derive(Debug)]
pub enum SearchField {
    Text(TextField),
    Range(RangeField),
    TimeRange(TimeRangeField),
    Multi(MultiField),
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text filter and return it for chained predicate setters.
    /// The returned descriptor is the one stored in the query; setters
    /// mutate it in place.
    pub fn add_text_field(&mut self, field: &str) -> &mut TextField {
        self.fields.push(SearchField::Text(TextField::new(field)));
        match self.fields.last_mut() {
            Some(SearchField::Text(f)) => f,
            _ => unreachable!("a text field was just pushed"),
        }
    }

    /// Append a numeric range filter and return it for chained setters
    pub fn add_range_field(&mut self, field: &str) -> &mut RangeField {
        self.fields.push(SearchField::Range(RangeField::new(field)));
        match self.fields.last_mut() {
            Some(SearchField::Range(f)) => f,
            _ => unreachable!("a range field was just pushed"),
        }
    }

    /// Append a time range filter and return it for chained setters
    pub fn add_time_range_field(&mut self, field: &str) -> &mut TimeRangeField {
        self.fields
            .push(SearchField::TimeRange(TimeRangeField::new(field)));
        match self.fields.last_mut() {
            Some(SearchField::TimeRange(f)) => f,
            _ => unreachable!("a time range field was just pushed"),
        }
    }

    /// Append a multi-value filter and return it for chained setters
    pub fn add_multi_field(&mut self, field: &str) -> &mut MultiField {
        self.fields.push(SearchField::Multi(MultiField::new(field)));
        match self.fields.last_mut() {
            Some(SearchField::Multi(f)) => f,
            _ => unreachable!("a multi field was just pushed"),
        }
    }

    /// Serialize to the `<search>` document, fields in insertion order,
    /// emitting only the sub-predicates that were set
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Start(BytesStart::new("search")))?;
        for field in &self.fields {
            field.write_xml(&mut writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("search")))?;
        Ok(String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error())?)
    }
}

impl SearchField {
    fn write_xml(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        match self {
            Self::Text(f) => f.write_xml(writer),
            Self::Range(f) => f.write_xml(writer),
            Self::TimeRange(f) => f.write_xml(writer),
            Self::Multi(f) => f.write_xml(writer),
        }
    }
}

fn write_leaf(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Text filter: is / is-not / starts-with / ends-with / contains
#[derive(Debug, Default)]
pub struct TextField {
    name: String,
    is: Option<String>,
    is_not: Option<String>,
    starts_with: Option<String>,
    ends_with: Option<String>,
    contains: Option<String>,
}

impl TextField {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn is<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.is = Some(value.into());
        self
    }

    pub fn is_not<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.is_not = Some(value.into());
        self
    }

    pub fn starts_with<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.starts_with = Some(value.into());
        self
    }

    pub fn ends_with<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.ends_with = Some(value.into());
        self
    }

    pub fn contains<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.contains = Some(value.into());
        self
    }

    fn write_xml(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new(self.name.as_str())))?;
        if let Some(v) = &self.is {
            write_leaf(writer, "is", v)?;
        }
        if let Some(v) = &self.is_not {
            write_leaf(writer, "is-not", v)?;
        }
        if let Some(v) = &self.starts_with {
            write_leaf(writer, "starts-with", v)?;
        }
        if let Some(v) = &self.ends_with {
            write_leaf(writer, "ends-with", v)?;
        }
        if let Some(v) = &self.contains {
            write_leaf(writer, "contains", v)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Numeric range filter. Sub-predicates are optional so that an unset
/// bound is distinguishable from a bound of zero.
#[derive(Debug, Default)]
pub struct RangeField {
    name: String,
    is: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeField {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn is(&mut self, value: f64) -> &mut Self {
        self.is = Some(value);
        self
    }

    pub fn min(&mut self, value: f64) -> &mut Self {
        self.min = Some(value);
        self
    }

    pub fn max(&mut self, value: f64) -> &mut Self {
        self.max = Some(value);
        self
    }

    fn write_xml(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new(self.name.as_str())))?;
        if let Some(v) = self.is {
            write_leaf(writer, "is", &v.to_string())?;
        }
        if let Some(v) = self.min {
            write_leaf(writer, "min", &v.to_string())?;
        }
        if let Some(v) = self.max {
            write_leaf(writer, "max", &v.to_string())?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Time range filter. Setters take any chrono timestamp and store it
/// pre-formatted in the gateway's text format.
#[derive(Debug, Default)]
pub struct TimeRangeField {
    name: String,
    is: Option<String>,
    min: Option<String>,
    max: Option<String>,
}

impl TimeRangeField {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn set_is<Tz: TimeZone>(&mut self, at: &DateTime<Tz>) -> &mut Self
    where
        Tz::Offset: fmt::Display,
    {
        self.is = Some(at.format(TIMESTAMP_FORMAT).to_string());
        self
    }

    pub fn set_min<Tz: TimeZone>(&mut self, at: &DateTime<Tz>) -> &mut Self
    where
        Tz::Offset: fmt::Display,
    {
        self.min = Some(at.format(TIMESTAMP_FORMAT).to_string());
        self
    }

    pub fn set_max<Tz: TimeZone>(&mut self, at: &DateTime<Tz>) -> &mut Self
    where
        Tz::Offset: fmt::Display,
    {
        self.max = Some(at.format(TIMESTAMP_FORMAT).to_string());
        self
    }

    fn write_xml(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new(self.name.as_str())))?;
        if let Some(v) = &self.is {
            write_leaf(writer, "is", v)?;
        }
        if let Some(v) = &self.min {
            write_leaf(writer, "min", v)?;
        }
        if let Some(v) = &self.max {
            write_leaf(writer, "max", v)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Multi-value filter: a `type="array"` element of `<item>` children
#[derive(Debug, Default)]
pub struct MultiField {
    name: String,
    items: Vec<String>,
}

impl MultiField {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
        }
    }

    pub fn add_item<S: Into<String>>(&mut self, item: S) -> &mut Self {
        self.items.push(item.into());
        self
    }

    fn write_xml(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        start.push_attribute(("type", "array"));
        writer.write_event(Event::Start(start))?;
        for item in &self.items {
            write_leaf(writer, "item", item)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Result page returned by search endpoints (`<search-results>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchResults {
    pub page_size: String,
    pub ids: IdList,
}

/// Container element `<ids>` inside a search result page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IdList {
    #[serde(rename = "item")]
    pub items: Vec<String>,
}
