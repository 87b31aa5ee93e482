use chrono::{Local, NaiveDateTime};
use log::{debug, warn};

use layered_event_anchor::{EventAnchor, EventAnchorResolver};
use layered_temporal::{Normalizer, ReferenceContext, RuleSet, SpanMatcher};
use layered_timex::{DependencyTree, TokenRange};

use crate::config::ProcessorConfig;
use crate::errors::{ProcessError, ProcessResult};
use crate::input::DateInput;
use crate::parser::DependencyParser;
use crate::prepare::{ensure_final_period, prepare_sentence};
use crate::record::{ExpressionRecord, SentenceResult, SentenceStatus};

/// Runs the grammar and the event search over batches of sentences.
///
/// Sentences are independent of each other. A sentence that cannot be
/// parsed, or whose dates cannot be read, comes back as
/// [`SentenceStatus::Skipped`] and the rest of the batch carries on.
/// Results are always in input order.
#[derive(Debug, Clone)]
pub struct TimexProcessor<'r> {
    config: ProcessorConfig,
    matcher: SpanMatcher<'r>,
    normalizer: Normalizer<'r>,
    resolver: EventAnchorResolver,
}

impl TimexProcessor<'static> {
    pub fn standard() -> Self {
        TimexProcessor::with_config(ProcessorConfig::standard())
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        TimexProcessor::new(RuleSet::standard(), config)
    }
}

/// A sentence waiting for its parse.
struct Pending<'s> {
    idx: usize,
    text: &'s str,
    prepared: String,
    ctx: ReferenceContext,
}

impl<'r> TimexProcessor<'r> {
    pub fn new(rules: &'r RuleSet, config: ProcessorConfig) -> Self {
        TimexProcessor {
            matcher: SpanMatcher::new(rules),
            normalizer: Normalizer::new(rules).with_fallback(config.fallback_parsers),
            resolver: EventAnchorResolver::new(config.anchor_config()),
            config,
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Processes raw sentence texts, parsing them with `parser` in batches of
    /// [`ProcessorConfig::batch_size`].
    ///
    /// `dates` and `birth_dates` are either empty or hold one entry per
    /// sentence. A missing reference date means "now"; a missing birth date
    /// leaves age-anchored expressions unresolved.
    pub fn process<P, S>(
        &self,
        parser: &mut P,
        sentences: &[S],
        dates: &[DateInput],
        birth_dates: &[DateInput],
    ) -> ProcessResult<Vec<SentenceResult>>
    where
        P: DependencyParser + ?Sized,
        S: AsRef<str>,
    {
        check_len("dates", dates, sentences.len())?;
        check_len("birth dates", birth_dates, sentences.len())?;

        let mut results: Vec<Option<SentenceResult>> = vec![None; sentences.len()];
        let mut pending = Vec::new();
        for (idx, sentence) in sentences.iter().enumerate() {
            let text = sentence.as_ref();
            let ctx = match context(dates, birth_dates, idx) {
                Ok(ctx) => ctx,
                Err(err) => {
                    warn!("skipping sentence {}: {}", idx, err);
                    results[idx] = Some(SentenceResult::skipped(text, err.to_string()));
                    continue;
                }
            };
            let prepared = if self.config.prepare_sentences {
                prepare_sentence(text)
            } else {
                ensure_final_period(text)
            };
            if prepared.is_empty() {
                warn!("skipping sentence {}: no text", idx);
                results[idx] = Some(SentenceResult::skipped(text, "empty sentence".to_string()));
                continue;
            }
            pending.push(Pending {
                idx,
                text,
                prepared,
                ctx,
            });
        }

        for batch in pending.chunks(self.config.batch_size.max(1)) {
            let texts: Vec<String> = batch.iter().map(|p| p.prepared.clone()).collect();
            let parsed = parser.parse_batch(&texts).and_then(|blocks| {
                if blocks.len() == batch.len() {
                    Ok(blocks)
                } else {
                    Err(ProcessError::Parser {
                        message: format!(
                            "{} parses returned for {} sentences",
                            blocks.len(),
                            batch.len()
                        ),
                    })
                }
            });

            match parsed {
                Ok(blocks) => {
                    for (sentence, block) in batch.iter().zip(blocks) {
                        results[sentence.idx] =
                            Some(self.analyze_block(sentence.text, &sentence.prepared, &block, sentence.ctx));
                    }
                }
                Err(err) => {
                    for sentence in batch {
                        warn!("skipping sentence {}: {}", sentence.idx, err);
                        let mut result = SentenceResult::skipped(sentence.text, err.to_string());
                        result.prepared = sentence.prepared.clone();
                        results[sentence.idx] = Some(result);
                    }
                }
            }
        }

        Ok(results.into_iter().flatten().collect())
    }

    /// Processes sentences that already come as CoNLL-U blocks.
    pub fn process_parsed<S: AsRef<str>>(
        &self,
        blocks: &[S],
        dates: &[DateInput],
        birth_dates: &[DateInput],
    ) -> ProcessResult<Vec<SentenceResult>> {
        check_len("dates", dates, blocks.len())?;
        check_len("birth dates", birth_dates, blocks.len())?;

        let results = blocks
            .iter()
            .enumerate()
            .map(|(idx, block)| match context(dates, birth_dates, idx) {
                Ok(ctx) => self.analyze_block("", "", block.as_ref(), ctx),
                Err(err) => {
                    warn!("skipping sentence {}: {}", idx, err);
                    SentenceResult::skipped("", err.to_string())
                }
            })
            .collect();
        Ok(results)
    }

    /// Every expression of one parsed sentence, with its value and event.
    pub fn analyze(&self, tree: &DependencyTree, ctx: &ReferenceContext) -> Vec<ExpressionRecord> {
        let spans = self.matcher.find_in(tree);
        let ranges: Vec<TokenRange> = spans.iter().map(|span| span.range).collect();

        spans
            .iter()
            .map(|span| {
                let normalization = self.normalizer.normalize(tree, span, ctx);
                let event = if self.config.extract_events {
                    self.resolver.event(tree, span.range, &ranges)
                } else {
                    EventAnchor::empty()
                };
                ExpressionRecord {
                    expression_text: span.text(tree),
                    event_text: event.text(tree),
                    normalized_form: normalization.form,
                    envelope: normalization.envelope,
                    stamp: span.stamp,
                    rule: span.rule,
                    resolved_by: normalization.resolved_by,
                    range: span.range,
                    event_tokens: event.tokens,
                    event_step: event.step,
                }
            })
            .collect()
    }

    /// An empty `text` or `prepared` is filled in from the parse.
    fn analyze_block(&self, text: &str, prepared: &str, block: &str, ctx: ReferenceContext) -> SentenceResult {
        let tree = match DependencyTree::from_conllu(block) {
            Ok(tree) => tree,
            Err(err) => {
                warn!("skipping sentence {:?}: {}", text, err);
                let mut result = SentenceResult::skipped(text, err.to_string());
                result.prepared = prepared.to_string();
                result.reference_date = Some(ctx.observation);
                result.birth_date = ctx.birth_date;
                return result;
            }
        };

        let expressions = self.analyze(&tree, &ctx);
        debug!("{} expressions in {:?}", expressions.len(), tree.text());
        let rebuilt = || tree.text();
        SentenceResult {
            text: if text.is_empty() { rebuilt() } else { text.to_string() },
            prepared: if prepared.is_empty() { rebuilt() } else { prepared.to_string() },
            reference_date: Some(ctx.observation),
            birth_date: ctx.birth_date,
            status: SentenceStatus::Processed,
            expressions,
        }
    }
}

fn check_len(what: &'static str, inputs: &[DateInput], expected: usize) -> ProcessResult<()> {
    if inputs.is_empty() || inputs.len() == expected {
        Ok(())
    } else {
        Err(ProcessError::LengthMismatch {
            what,
            found: inputs.len(),
            expected,
        })
    }
}

fn context(dates: &[DateInput], birth_dates: &[DateInput], idx: usize) -> ProcessResult<ReferenceContext> {
    let observation = match dates.get(idx) {
        Some(date) => date.datetime()?,
        None => None,
    };
    let mut ctx = ReferenceContext::new(observation.unwrap_or_else(now));
    if let Some(birth) = birth_dates.get(idx) {
        if let Some(birth) = birth.date()? {
            ctx = ctx.with_birth_date(birth);
        }
    }
    Ok(ctx)
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
