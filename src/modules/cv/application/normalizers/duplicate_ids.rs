use std::collections::HashSet;
use std::hash::Hash;

use tracing::warn;

use super::{DocumentNormalizer, NormalizeError};
use crate::cv::domain::entities::CvDocument;

#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateIdWarning;

impl DuplicateIdWarning {
    pub fn duplicates<I, K>(ids: I) -> Vec<K>
    where
        I: IntoIterator<Item = K>,
        K: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for id in ids {
            if !seen.insert(id.clone()) && reported.insert(id.clone()) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

impl DocumentNormalizer for DuplicateIdWarning {
    fn name(&self) -> &'static str {
        "duplicate_ids"
    }

    fn normalize(&self, document: &mut CvDocument) -> Result<(), NormalizeError> {
        // entries without an id are not compared
        let experience = Self::duplicates(
            document
                .experience
                .iter()
                .filter_map(|e| e.id.as_ref().map(|id| id.to_string())),
        );
        if !experience.is_empty() {
            warn!("Duplicate experience ids in CV document: {:?}", experience);
        }

        let education = Self::duplicates(
            document
                .education
                .iter()
                .filter_map(|e| e.id.as_ref().map(|id| id.to_string())),
        );
        if !education.is_empty() {
            warn!("Duplicate education ids in CV document: {:?}", education);
        }

        Ok(())
    }
}
