//! S3 wire entities for bucket listings and tagging
//!
//! Element names are part of the S3 compatibility surface. XML goes through
//! quick-xml's serde support; see [`to_xml`] and [`from_xml`].

use crate::{Bucket, CoreError, Result};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::str::FromStr;

/// S3 XML namespace
pub const S3_XMLNS: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A key/value label attached to a bucket or object
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parses the compact `key=value` form used in request headers
///
/// Exactly one `=` is required and the key must not be empty. The value may
/// be empty.
impl FromStr for Tag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| CoreError::InvalidTag(format!("missing '=' in {:?}", s)))?;

        if value.contains('=') {
            return Err(CoreError::InvalidTag(format!(
                "more than one '=' in {:?}",
                s
            )));
        }
        if key.is_empty() {
            return Err(CoreError::InvalidTag(format!("empty key in {:?}", s)));
        }

        Ok(Self::new(key, value))
    }
}

/// Ordered sequence of tags; keys are not required to be unique
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    #[serde(rename = "Tag", default)]
    tags: Vec<Tag>,
}

impl TagSet {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.tags
    }
}

impl From<Vec<Tag>> for TagSet {
    fn from(tags: Vec<Tag>) -> Self {
        Self::new(tags)
    }
}

impl IntoIterator for TagSet {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

/// `<Tagging><TagSet><Tag>..</Tag></TagSet></Tagging>` envelope
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tagging {
    #[serde(rename = "TagSet", default)]
    pub tag_set: TagSet,
}

impl Tagging {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            tag_set: TagSet::new(tags),
        }
    }

    /// Parse the `x-amz-tagging` header form `k1=v1&k2=v2`
    pub fn from_header(header: &str) -> Result<Self> {
        if header.is_empty() {
            return Ok(Self::default());
        }

        let tags = header
            .split('&')
            .map(str::parse::<Tag>)
            .collect::<Result<Vec<Tag>>>()?;
        Ok(Self::new(tags))
    }

    pub fn to_xml(&self) -> Result<String> {
        to_xml("Tagging", self)
    }
}

/// One `<Bucket>` entry of a bucket listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketEntry {
    #[serde(rename = "Name")]
    pub name: String,
    /// ISO-8601 UTC with millisecond precision
    #[serde(rename = "CreationDate")]
    pub creation_date: String,
}

impl From<&Bucket> for BucketEntry {
    fn from(bucket: &Bucket) -> Self {
        Self {
            name: bucket.name().to_string(),
            creation_date: bucket
                .creation_date()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// `<Buckets>` document with repeated, unwrapped `<Bucket>` children
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buckets {
    #[serde(rename = "Bucket", default)]
    pub buckets: Vec<BucketEntry>,
}

impl Buckets {
    pub fn from_buckets(buckets: &[Bucket]) -> Self {
        Self {
            buckets: buckets.iter().map(BucketEntry::from).collect(),
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        to_xml("Buckets", self)
    }
}

/// Bucket owner shown in listings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "DisplayName")]
    pub display_name: String,
}

/// ListBuckets response envelope
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAllMyBucketsResult {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "Owner")]
    pub owner: Owner,
    #[serde(rename = "Buckets", default)]
    pub buckets: Buckets,
}

impl ListAllMyBucketsResult {
    pub fn new(owner: Owner, buckets: &[Bucket]) -> Self {
        Self {
            xmlns: S3_XMLNS.to_string(),
            owner,
            buckets: Buckets::from_buckets(buckets),
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        to_xml("ListAllMyBucketsResult", self)
    }
}

/// Serialize `value` as an XML document with root element `root`
pub fn to_xml<T: Serialize>(root: &str, value: &T) -> Result<String> {
    let body = quick_xml::se::to_string_with_root(root, value)
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    Ok(format!("{}\n{}", XML_DECLARATION, body))
}

/// Parse an XML document; the root element name is not checked
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).map_err(|e| CoreError::Deserialization(e.to_string()))
}
