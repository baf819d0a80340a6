//! Responsive configuration builder.

use slidekit_model::config::{
    AutoplayConfig, DEFAULT_AUTOPLAY_SPEED_MS, DEFAULT_ITEM_PADDING,
    DEFAULT_LIST_PADDING, DEFAULT_LIST_WINDOWED, DEFAULT_NAVIGATION_COLOR,
    DEFAULT_NAVIGATION_START, ItemConfig, ListConfig, NavigationConfig,
    PositionConfig, ResolvedConfig,
};
use slidekit_model::{BreakpointRule, RawBreakpointRule, SliderOptions};
use tracing::warn;

pub const FALLBACK_RULE_COUNT: usize = 5;

/// Largest visible count a user rule may request. Keeps page arithmetic
/// within `isize`.
pub const MAX_RULE_SIZE: usize = isize::MAX as usize;

/// The fallback breakpoint table, adjusted for small collections.
///
/// With `0 < item_count < 5` the widest rule shows exactly `item_count`
/// items and each narrower rule shows one fewer than its wider neighbour,
/// unless that neighbour is already no larger than the rule's own default,
/// in which case it copies it. Sizes therefore never exceed the item count
/// and never grow as the width shrinks.
pub fn fallback_rules(item_count: usize) -> [BreakpointRule; FALLBACK_RULE_COUNT] {
    let mut rules = [
        BreakpointRule::up_to(576.0, 1),
        BreakpointRule::between(576.0, 768.0, 2),
        BreakpointRule::between(768.0, 992.0, 3),
        BreakpointRule::between(992.0, 1200.0, 4),
        BreakpointRule::starting_at(1200.0, 5),
    ];

    if item_count > 0 && item_count < FALLBACK_RULE_COUNT {
        rules[FALLBACK_RULE_COUNT - 1].size = item_count;
        // The narrowest rule already shows a single item.
        for i in (1..FALLBACK_RULE_COUNT - 1).rev() {
            let finer = rules[i + 1].size;
            rules[i].size = if finer > rules[i].size {
                finer - 1
            } else {
                finer
            };
        }
    }

    rules
}

/// Merge `raw` with defaults for a slider holding `item_count` items.
///
/// Never fails: missing, zero, empty, or malformed fields fall back to their
/// defaults, and user breakpoint rules that cannot yield a visible count are
/// dropped.
pub fn build(raw: &SliderOptions, item_count: usize) -> ResolvedConfig {
    let navigation = raw.navigation.as_ref();
    let item = raw.item.as_ref();
    let list = raw.list.as_ref();
    let autoplay = raw.autoplay.as_ref();

    let mut responsive: Vec<BreakpointRule> = raw
        .responsive
        .iter()
        .flatten()
        .enumerate()
        .filter_map(|(index, rule)| sanitize_rule(index, rule))
        .collect();
    responsive.extend(fallback_rules(item_count));

    ResolvedConfig {
        navigation: NavigationConfig {
            start: truthy(navigation.and_then(|n| n.start))
                .unwrap_or(DEFAULT_NAVIGATION_START),
            color: non_empty(navigation.and_then(|n| n.color.as_deref()))
                .unwrap_or(DEFAULT_NAVIGATION_COLOR)
                .to_string(),
        },
        item: ItemConfig {
            class: non_empty(item.and_then(|i| i.class.as_deref()))
                .unwrap_or_default()
                .to_string(),
            padding: truthy(item.and_then(|i| i.padding))
                .unwrap_or(DEFAULT_ITEM_PADDING),
        },
        list: ListConfig {
            class: non_empty(list.and_then(|l| l.class.as_deref()))
                .unwrap_or_default()
                .to_string(),
            windowed: truthy(list.and_then(|l| l.windowed))
                .unwrap_or(DEFAULT_LIST_WINDOWED),
            padding: truthy(list.and_then(|l| l.padding))
                .unwrap_or(DEFAULT_LIST_PADDING),
        },
        responsive,
        position: PositionConfig {
            start: raw
                .position
                .as_ref()
                .and_then(|p| p.start)
                .map(|start| start.trunc() as isize)
                .unwrap_or(0),
        },
        autoplay: AutoplayConfig {
            play: autoplay.and_then(|a| a.play).unwrap_or(false),
            speed_ms: autoplay
                .and_then(|a| a.speed)
                .map(|speed| {
                    if speed < 0.0 {
                        warn!(speed, "negative autoplay speed, using 0ms");
                    }
                    // `as` saturates: negatives become 0.
                    speed as u64
                })
                .unwrap_or(DEFAULT_AUTOPLAY_SPEED_MS),
            repeat: autoplay.and_then(|a| a.repeat).unwrap_or(false),
        },
    }
}

fn sanitize_rule(index: usize, rule: &RawBreakpointRule) -> Option<BreakpointRule> {
    let size = match rule.size {
        Some(size) if size >= 1.0 => {
            // `as` saturates at `usize::MAX` for huge values.
            let size = size.trunc() as usize;
            if size > MAX_RULE_SIZE {
                warn!(index, size, "capping oversized breakpoint rule");
            }
            size.min(MAX_RULE_SIZE)
        }
        other => {
            warn!(index, size = ?other, "discarding breakpoint rule without a positive size");
            return None;
        }
    };
    Some(BreakpointRule::new(truthy(rule.start), truthy(rule.end), size))
}

/// Zero and non-finite numbers count as unset.
fn truthy(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::{
        AutoplayOptions, ItemOptions, ListOptions, NavigationOptions,
        PositionOptions,
    };

    fn sizes(rules: &[BreakpointRule]) -> Vec<usize> {
        rules.iter().map(|r| r.size).collect()
    }

    #[test]
    fn defaults_for_empty_options() {
        let cfg = build(&SliderOptions::default(), 10);
        assert_eq!(cfg.navigation.start, 992.0);
        assert_eq!(cfg.navigation.color, "#000");
        assert_eq!(cfg.item.padding, 16.0);
        assert_eq!(cfg.item.class, "");
        assert_eq!(cfg.list.windowed, 1200.0);
        assert_eq!(cfg.list.padding, 24.0);
        assert_eq!(cfg.autoplay.speed_ms, 2000);
        assert!(!cfg.autoplay.play);
        assert!(!cfg.autoplay.repeat);
        assert_eq!(cfg.position.start, 0);
        assert_eq!(sizes(&cfg.responsive), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn user_rules_precede_fallbacks() {
        let raw = SliderOptions {
            responsive: Some(vec![
                RawBreakpointRule::new(None, Some(992.0), 3),
                RawBreakpointRule::new(None, None, 4),
            ]),
            ..Default::default()
        };
        let cfg = build(&raw, 10);
        assert_eq!(cfg.responsive.len(), 2 + FALLBACK_RULE_COUNT);
        assert_eq!(cfg.responsive[0], BreakpointRule::up_to(992.0, 3));
        assert_eq!(cfg.responsive[1], BreakpointRule::always(4));
    }

    #[test]
    fn small_collections_cap_breakpoint_sizes() {
        assert_eq!(sizes(&fallback_rules(1)), vec![1, 1, 1, 1, 1]);
        assert_eq!(sizes(&fallback_rules(2)), vec![1, 2, 2, 2, 2]);
        assert_eq!(sizes(&fallback_rules(3)), vec![1, 2, 3, 3, 3]);
        assert_eq!(sizes(&fallback_rules(4)), vec![1, 2, 3, 4, 4]);
        assert_eq!(sizes(&fallback_rules(5)), vec![1, 2, 3, 4, 5]);
        assert_eq!(sizes(&fallback_rules(0)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn adjusted_sizes_never_exceed_items_and_never_grow_narrower() {
        for count in 1..FALLBACK_RULE_COUNT {
            let rules = fallback_rules(count);
            assert_eq!(rules[FALLBACK_RULE_COUNT - 1].size, count);
            for pair in rules.windows(2) {
                assert!(pair[0].size <= pair[1].size, "{count}: {pair:?}");
            }
            assert!(rules.iter().all(|r| r.size >= 1 && r.size <= count));
        }
    }

    #[test]
    fn zero_and_empty_values_fall_back() {
        let raw = SliderOptions {
            navigation: Some(NavigationOptions {
                start: Some(0.0),
                color: Some(String::new()),
            }),
            item: Some(ItemOptions {
                class: Some("card".into()),
                padding: Some(0.0),
            }),
            list: Some(ListOptions {
                class: None,
                windowed: Some(f32::NAN),
                padding: Some(8.0),
            }),
            ..Default::default()
        };
        let cfg = build(&raw, 10);
        assert_eq!(cfg.navigation.start, 992.0);
        assert_eq!(cfg.navigation.color, "#000");
        assert_eq!(cfg.item.class, "card");
        assert_eq!(cfg.item.padding, 16.0);
        assert_eq!(cfg.list.windowed, 1200.0);
        assert_eq!(cfg.list.padding, 8.0);
    }

    #[test]
    fn nullish_fields_keep_explicit_zero() {
        let raw = SliderOptions {
            position: Some(PositionOptions { start: Some(3.9) }),
            autoplay: Some(AutoplayOptions {
                play: Some(true),
                speed: Some(0.0),
                repeat: Some(true),
            }),
            ..Default::default()
        };
        let cfg = build(&raw, 10);
        assert_eq!(cfg.position.start, 3);
        assert!(cfg.autoplay.play);
        assert!(cfg.autoplay.repeat);
        assert_eq!(cfg.autoplay.speed_ms, 0);
        assert_eq!(cfg.autoplay.interval().as_millis(), 1);
    }

    #[test]
    fn rules_without_usable_size_are_dropped() {
        let raw = SliderOptions {
            responsive: Some(vec![
                RawBreakpointRule {
                    start: Some(0.0),
                    end: Some(500.0),
                    size: Some(0.0),
                },
                RawBreakpointRule {
                    start: Some(0.0),
                    end: Some(0.0),
                    size: Some(2.0),
                },
                RawBreakpointRule::default(),
            ]),
            ..Default::default()
        };
        let cfg = build(&raw, 10);
        assert_eq!(cfg.responsive.len(), 1 + FALLBACK_RULE_COUNT);
        // Zero bounds behave as unset.
        assert_eq!(cfg.responsive[0], BreakpointRule::always(2));
    }

    #[test]
    fn oversized_rules_are_capped() {
        let raw = SliderOptions {
            responsive: Some(vec![RawBreakpointRule {
                size: Some(1e20),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let cfg = build(&raw, 10);
        assert_eq!(cfg.responsive[0].size, MAX_RULE_SIZE);
    }
}
