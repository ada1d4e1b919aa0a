//! Data loading utilities
//!
//! Reads the sentiment table (CSV), region shapes (JSON) and tweet files
//! (tab-separated text).

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::record::Record;
use crate::error::{Error, Result};
use crate::geo::{Polygon, Position, Region};
use crate::sentiment::SentimentLexicon;

const TWEET_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A ring of `[longitude, latitude]` pairs, optionally wrapped in a one-element list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Shape {
    Ring(Vec<[f64; 2]>),
    Wrapped(Vec<Vec<[f64; 2]>>),
}

impl Shape {
    fn into_polygon(self, region: &str) -> Result<Polygon> {
        let ring = match self {
            Shape::Ring(ring) => ring,
            Shape::Wrapped(mut rings) => {
                if rings.len() != 1 {
                    return Err(Error::InvalidPolygon(format!(
                        "region '{}' has a shape with {} rings, expected 1",
                        region,
                        rings.len()
                    )));
                }
                rings.remove(0)
            }
        };

        Polygon::new(
            ring.into_iter()
                .map(|[lon, lat]| Position::new(lat, lon))
                .collect(),
        )
    }
}

/// Data loader for the static resources
pub struct DataLoader;

impl DataLoader {
    /// Load a `word,value` CSV (no header) into a lexicon
    pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<SentimentLexicon> {
        let file = File::open(path.as_ref())?;
        let lexicon = Self::read_lexicon(file)?;
        debug!("Loaded {} sentiment words from {:?}", lexicon.len(), path.as_ref());
        Ok(lexicon)
    }

    pub fn read_lexicon<R: Read>(reader: R) -> Result<SentimentLexicon> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut lexicon = SentimentLexicon::new();
        for row in reader.deserialize() {
            let (word, value): (String, f64) = row?;
            lexicon.insert(&word, value)?;
        }
        Ok(lexicon)
    }

    /// Load region shapes from a JSON object of name to shape list
    ///
    /// Regions come back sorted by name.
    pub fn load_regions<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
        let file = File::open(path.as_ref())?;
        let regions = Self::read_regions(BufReader::new(file))?;
        debug!("Loaded {} regions from {:?}", regions.len(), path.as_ref());
        Ok(regions)
    }

    pub fn read_regions<R: Read>(reader: R) -> Result<Vec<Region>> {
        let raw: BTreeMap<String, Vec<Shape>> = serde_json::from_reader(reader)?;

        raw.into_iter()
            .map(|(name, shapes)| {
                let polygons = shapes
                    .into_iter()
                    .map(|shape| shape.into_polygon(&name))
                    .collect::<Result<Vec<_>>>()?;
                Region::new(name, polygons)
            })
            .collect()
    }

    /// Load every record of a tweet file, skipping malformed lines
    pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
        TweetFile::new(path.as_ref()).search("")
    }
}

/// Parse one tweet line: `[lat, lon]<TAB>_<TAB>YYYY-MM-DD HH:MM:SS<TAB>text`
///
/// The text is lowercased.
pub fn parse_tweet_line(line: &str) -> Result<Record> {
    let mut fields = line.splitn(4, '\t');
    let (Some(location), Some(_), Some(time), Some(text)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(Error::Parse(format!("expected 4 tab-separated fields: {:?}", line)));
    };

    let [lat, lon]: [f64; 2] = serde_json::from_str(location.trim())
        .map_err(|e| Error::Parse(format!("bad location {:?}: {}", location, e)))?;

    let timestamp = NaiveDateTime::parse_from_str(time.trim(), TWEET_TIME_FORMAT)
        .map_err(|e| Error::Parse(format!("bad timestamp {:?}: {}", time, e)))?;

    Ok(Record::new(
        text.trim_end_matches(['\r', '\n']).to_lowercase(),
        Some(timestamp),
        Position::new(lat, lon),
    ))
}

/// Provider of records matching a search term
pub trait RecordSource {
    fn search(&self, term: &str) -> Result<Vec<Record>>;
}

/// Whole-word, case-insensitive term match; an empty term matches everything
#[derive(Debug, Clone)]
pub struct TermMatcher {
    pattern: Option<Regex>,
}

impl TermMatcher {
    pub fn new(term: &str) -> Result<Self> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Self { pattern: None });
        }

        // terms may start or end with symbols such as '#', where \b never matches
        let pattern = Regex::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(&term)))
            .map_err(|e| Error::Parse(format!("bad search term {:?}: {}", term, e)))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(&text.to_lowercase()),
            None => true,
        }
    }
}

/// Tweet file on disk
#[derive(Debug, Clone)]
pub struct TweetFile {
    path: PathBuf,
}

impl TweetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for TweetFile {
    fn search(&self, term: &str) -> Result<Vec<Record>> {
        let matcher = TermMatcher::new(term)?;
        let reader = BufReader::new(File::open(&self.path)?);

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_tweet_line(&line) {
                Ok(record) if matcher.matches(record.text()) => records.push(record),
                Ok(_) => {}
                Err(e) => {
                    skipped += 1;
                    warn!("Skipping line {} of {:?}: {}", idx + 1, self.path, e);
                }
            }
        }

        debug!(
            "Found {} records for {:?} in {:?} ({} malformed lines)",
            records.len(),
            term,
            self.path,
            skipped
        );
        Ok(records)
    }
}

impl RecordSource for [Record] {
    fn search(&self, term: &str) -> Result<Vec<Record>> {
        let matcher = TermMatcher::new(term)?;
        Ok(self
            .iter()
            .filter(|record| matcher.matches(record.text()))
            .cloned()
            .collect())
    }
}

impl RecordSource for Vec<Record> {
    fn search(&self, term: &str) -> Result<Vec<Record>> {
        self.as_slice().search(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_lexicon() {
        let csv = "good,0.875\nbad,-0.625\n winning , 0.5\n";
        let lexicon = DataLoader::read_lexicon(csv.as_bytes()).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.value("winning"), Some(0.5));
        assert_eq!(lexicon.value("bad"), Some(-0.625));
    }

    #[test]
    fn test_read_lexicon_rejects_out_of_range() {
        let csv = "good,0.875\nawful,-1.5\n";
        assert!(matches!(
            DataLoader::read_lexicon(csv.as_bytes()),
            Err(Error::InvalidSentimentValue(_))
        ));
    }

    #[test]
    fn test_read_lexicon_rejects_bad_number() {
        let csv = "good,very\n";
        assert!(matches!(DataLoader::read_lexicon(csv.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn test_read_regions_swaps_coordinates() {
        let json = r#"{
            "ZZ": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
            "AA": [[[-120.0, 35.0], [-118.0, 35.0], [-118.0, 37.0], [-120.0, 35.0]]]
        }"#;
        let regions = DataLoader::read_regions(json.as_bytes()).unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name(), "AA");
        assert_eq!(regions[0].primary().first(), Position::new(35.0, -120.0));
        assert_eq!(regions[1].polygons().len(), 1);
    }

    #[test]
    fn test_read_regions_wrapped_and_multi_part() {
        let json = r#"{
            "HI": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                [[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]
            ]
        }"#;
        let regions = DataLoader::read_regions(json.as_bytes()).unwrap();

        assert_eq!(regions[0].polygons().len(), 2);
        assert_eq!(regions[0].polygons()[1].first(), Position::new(5.0, 5.0));
    }

    #[test]
    fn test_read_regions_rejects_open_ring() {
        let json = r#"{"XX": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]}"#;
        assert!(matches!(
            DataLoader::read_regions(json.as_bytes()),
            Err(Error::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_read_regions_rejects_empty_region() {
        let json = r#"{"XX": []}"#;
        assert!(matches!(
            DataLoader::read_regions(json.as_bytes()),
            Err(Error::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_parse_tweet_line() {
        let line = "[38.0, -122.0]\t6\t2011-08-28 19:24:18\tWelcome to San Francisco";
        let record = parse_tweet_line(line).unwrap();

        assert_eq!(record.text(), "welcome to san francisco");
        assert_eq!(record.position(), Position::new(38.0, -122.0));
        assert_eq!(record.timestamp().unwrap().hour(), 19);
    }

    #[test]
    fn test_parse_tweet_line_errors() {
        assert!(matches!(parse_tweet_line("no tabs here"), Err(Error::Parse(_))));
        assert!(matches!(
            parse_tweet_line("[38.0]\t6\t2011-08-28 19:24:18\ttext"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_tweet_line("[38.0, -122.0]\t6\tyesterday\ttext"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_term_matcher_word_boundaries() {
        let matcher = TermMatcher::new("My Job").unwrap();

        assert!(matcher.matches("i love my job!"));
        assert!(!matcher.matches("my jobs are many"));
        assert!(TermMatcher::new("").unwrap().matches("anything"));
    }

    #[test]
    fn test_term_matcher_symbol_terms() {
        let hashtag = TermMatcher::new("#winning").unwrap();
        assert!(hashtag.matches("i love my job. #winning"));
        assert!(hashtag.matches("#winning"));
        assert!(!hashtag.matches("i love my job. #winningest"));

        let smiley = TermMatcher::new(":)").unwrap();
        assert!(smiley.matches("so happy :) today"));
        assert!(smiley.matches(":)"));

        assert!(!TermMatcher::new("job").unwrap().matches("jobless #job2"));
    }

    #[test]
    fn test_tweet_file_search() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[38.0, -122.0]\t6\t2011-08-28 19:24:18\ti love my job").unwrap();
        writeln!(file, "garbage line").unwrap();
        writeln!(file, "[41.0, -74.0]\t6\t2011-08-29 07:01:00\tsandwich time").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "[30.0, -97.0]\t6\t2011-08-29 23:59:59\tmy job is fine").unwrap();

        let source = TweetFile::new(file.path());
        let matches = source.search("my job").unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].hour(), Some(23));

        let all = DataLoader::load_records(file.path()).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_memory_source() {
        let records = vec![
            Record::new("texas is big", None, Position::new(31.0, -99.0)),
            Record::new("new york pizza", None, Position::new(41.0, -74.0)),
        ];

        let found = records.search("texas").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text(), "texas is big");
    }

    #[test]
    fn test_load_lexicon_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "love,0.625").unwrap();
        writeln!(file, "hate,-0.75").unwrap();

        let lexicon = DataLoader::load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.words(), vec!["hate", "love"]);
    }
}
