//! End-to-end processing: classify, normalize, thread

use crate::comment::{CommentForest, ForestBuilder, Normalizer, RawComment, Stats};
use crate::config::{Config, OrphanPolicy};
use crate::error::Result;
use crate::export::VideoDocument;
use crate::filter::Classifier;
use crate::source::VideoDump;
use tracing::info;

/// Output of one processing pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Processed {
    pub forest: CommentForest,
    pub stats: Stats,
}

/// The comment sanitization and threading engine
#[derive(Debug, Clone)]
pub struct CommentPipeline {
    classifier: Classifier,
    normalizer: Normalizer,
    orphan_policy: OrphanPolicy,
}

impl CommentPipeline {
    pub fn new(classifier: Classifier, normalizer: Normalizer, orphan_policy: OrphanPolicy) -> Self {
        Self {
            classifier,
            normalizer,
            orphan_policy,
        }
    }

    /// Build a pipeline from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Classifier::from_config(&config.filter)?,
            Normalizer::new(config.output.time_zone),
            config.threading.orphan_policy,
        ))
    }

    /// Filter, redact and thread a flat comment list given in provider order
    pub fn build_forest(&self, comments: impl IntoIterator<Item = RawComment>) -> Processed {
        let mut stats = Stats::new();
        let mut builder = ForestBuilder::new(self.orphan_policy);

        for raw in comments {
            let classified = self.classifier.classify(raw);
            stats.record(&classified.outcome);
            if let Some(normalized) = self.normalizer.normalize(classified) {
                builder.insert(normalized);
            }
        }

        let kept = builder.len();
        let threaded = builder.build();
        stats.orphaned = threaded.orphaned;

        info!(
            "Kept {} comments ({} spam, {} sensitive, {} authors masked, {} orphaned)",
            kept - threaded.orphaned,
            stats.spam,
            stats.sensitive,
            stats.censored_author,
            stats.orphaned
        );

        Processed {
            forest: threaded.forest,
            stats,
        }
    }

    /// Process a whole provider dump into the output document
    pub fn process(&self, dump: VideoDump) -> (VideoDocument, Stats) {
        let Processed { forest, stats } = self.build_forest(dump.comments);
        (VideoDocument::new(dump.metadata, forest), stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayZone;
    use crate::export::{Exporter, JsonExporter};
    use crate::filter::KeywordSet;
    use crate::types::CommentId;
    use pretty_assertions::assert_eq;

    fn pipeline(policy: OrphanPolicy) -> CommentPipeline {
        let classifier =
            Classifier::new(KeywordSet::default_spam(), KeywordSet::default_sensitive()).unwrap();
        CommentPipeline::new(classifier, Normalizer::new(DisplayZone::Utc), policy)
    }

    fn ids(forest: &CommentForest) -> Vec<String> {
        forest
            .roots()
            .iter()
            .filter_map(|c| c.id.as_ref().map(|id| id.to_string()))
            .collect()
    }

    #[test]
    fn test_orphan_of_missing_parent_is_dropped() {
        let processed = pipeline(OrphanPolicy::Drop).build_forest(vec![
            RawComment::new("1").with_parent("root").with_text("a"),
            RawComment::new("2").with_parent("1").with_text("b"),
            RawComment::new("3").with_parent("99").with_text("c"),
        ]);

        assert_eq!(ids(&processed.forest), vec!["1"]);
        let replies = &processed.forest.roots()[0].replies;
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].id, Some(CommentId::from("2")));
        assert!(replies[0].replies.is_empty());
        assert_eq!(processed.stats.orphaned, 1);
    }

    #[test]
    fn test_reply_to_filtered_comment_is_dropped() {
        let processed = pipeline(OrphanPolicy::Drop).build_forest(vec![
            RawComment::new("1").with_parent("root").with_text("买VPN"),
            RawComment::new("2").with_parent("1").with_text("ok"),
            RawComment::new("3").with_parent("root").with_text("六四"),
            RawComment::new("4").with_parent("root").with_text("fine").with_author("@习近平粉"),
        ]);

        assert_eq!(ids(&processed.forest), vec!["4"]);
        assert_eq!(processed.forest.roots()[0].author, "***粉");
        assert_eq!(
            processed.stats,
            Stats {
                spam: 1,
                sensitive: 1,
                censored_author: 1,
                orphaned: 1,
            }
        );
        assert_eq!(processed.stats.dropped(), 2);
    }

    #[test]
    fn test_promote_policy_keeps_orphans() {
        let processed = pipeline(OrphanPolicy::Promote).build_forest(vec![
            RawComment::new("1").with_parent("root").with_text("https://spam.example"),
            RawComment::new("2").with_parent("1").with_text("reply"),
        ]);
        assert_eq!(ids(&processed.forest), vec!["2"]);
        assert_eq!(processed.stats.spam, 1);
        assert_eq!(processed.stats.orphaned, 0);
    }

    #[test]
    fn test_stats_match_dropped_count() {
        let input = vec![
            RawComment::new("1").with_text("加微信 v信 123"),
            RawComment::new("2").with_text("see www.test.com"),
            RawComment::new("3").with_text("台独"),
            RawComment::new("4").with_text("clean"),
            RawComment::new("5").with_text("clean").with_author("包子铺"),
        ];
        let total = input.len();
        let processed = pipeline(OrphanPolicy::Drop).build_forest(input);
        assert_eq!(processed.stats.dropped(), total - processed.forest.total_len());
        assert_eq!(processed.stats.censored_author, 1);
    }

    #[test]
    fn test_output_is_deterministic() {
        let dump = VideoDump {
            metadata: Default::default(),
            comments: vec![
                RawComment::new("1").with_parent("root").with_text("你好").with_timestamp(1700000000),
                RawComment::new("2").with_parent("1").with_text("回复").with_author("@amy"),
                RawComment::new("3").with_parent("root").with_text("second"),
            ],
        };
        let exporter = JsonExporter::pretty();
        let p = pipeline(OrphanPolicy::Drop);

        let (first, _) = p.process(dump.clone());
        let (second, _) = p.process(dump);
        assert_eq!(exporter.export(&first).unwrap(), exporter.export(&second).unwrap());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.filter.detect_urls = false;
        config.threading.orphan_policy = OrphanPolicy::Promote;
        let p = CommentPipeline::from_config(&config).unwrap();
        let processed = p.build_forest(vec![
            RawComment::new("1").with_text("http://x.com"),
            RawComment::new("2").with_parent("gone"),
        ]);
        assert_eq!(ids(&processed.forest), vec!["1", "2"]);
    }

    #[test]
    fn test_mistyped_fields_still_thread() {
        let dump = VideoDump::from_json_str(
            r#"{"id": "v", "comments": [
                {"id": "1", "parent": "root", "text": "a", "like_count": 1.5},
                {"id": "2", "parent": "1", "text": "b"},
                {"id": "3", "parent": "root", "text": "c", "author_id": 123}
            ]}"#,
        )
        .unwrap();
        let processed = pipeline(OrphanPolicy::Drop).build_forest(dump.comments);

        assert_eq!(ids(&processed.forest), vec!["1", "3"]);
        assert_eq!(processed.forest.roots()[0].replies.len(), 1);
        assert_eq!(processed.forest.roots()[0].like_count, Some(serde_json::json!(1.5)));
        assert_eq!(processed.forest.roots()[1].author_id, Some(serde_json::json!(123)));
        assert_eq!(processed.stats.orphaned, 0);
    }

    #[test]
    fn test_empty_parent_is_top_level() {
        let processed = pipeline(OrphanPolicy::Drop).build_forest(vec![
            RawComment::new("1").with_parent("").with_text("hi"),
            RawComment::new("2").with_parent("1").with_text("yo"),
        ]);
        assert_eq!(ids(&processed.forest), vec!["1"]);
        assert_eq!(processed.forest.total_len(), 2);
        assert_eq!(processed.stats.orphaned, 0);
    }
}
