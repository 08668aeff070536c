//! Which destinations a menu may offer right now.

use transit_domain::{ConditionExpr, Destination, LocationName, NetworkKind};

use crate::infrastructure::ports::{ConditionPort, EvaluationContext};

use super::registry::DestinationRegistry;

/// Destinations of `registry` the player may pick from `current`, in registry order.
///
/// The stop at the current location is always excluded. Conditional stops are only
/// offered when the evaluator is present and says yes.
pub fn filter_eligible<'a>(
    registry: &'a DestinationRegistry,
    current: &LocationName,
    evaluator: Option<&dyn ConditionPort>,
) -> Vec<&'a Destination> {
    registry
        .iter()
        .filter(|destination| destination.location() != current)
        .filter(|destination| {
            condition_holds(
                destination.condition(),
                registry.network(),
                current,
                evaluator,
            )
        })
        .collect()
}

/// Evaluate `condition`, failing closed when there is no evaluator or it errors.
pub(crate) fn condition_holds(
    condition: &ConditionExpr,
    network: NetworkKind,
    current: &LocationName,
    evaluator: Option<&dyn ConditionPort>,
) -> bool {
    if condition.is_unconditional() {
        return true;
    }
    let Some(evaluator) = evaluator else {
        tracing::debug!(%condition, "No condition evaluator, hiding conditional stop");
        return false;
    };

    let context = EvaluationContext {
        network,
        current_location: current.clone(),
    };
    match evaluator.evaluate(condition, &context) {
        Ok(holds) => holds,
        Err(e) => {
            tracing::warn!(%condition, error = %e, "Condition evaluation failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{ConditionError, MockConditionPort, RawStop};
    use transit_domain::{LanguageCode, PackId, StopId, WarpTarget};

    fn location(name: &str) -> LocationName {
        LocationName::new(name).expect("valid name")
    }

    fn stop(id: &str, at: &str) -> Destination {
        Destination::new(
            StopId::new(id).expect("valid id"),
            NetworkKind::Train,
            WarpTarget::new(location(at), 0, 0),
            0,
            at,
        )
    }

    fn registry() -> DestinationRegistry {
        let mut registry = DestinationRegistry::new(stop("transit.station", "Railroad"));
        let pack = PackId::new("Author.Pack").expect("valid id");
        let entries = vec![
            RawStop {
                target_map_name: "Forest".to_string(),
                ..Default::default()
            },
            RawStop {
                target_map_name: "Desert".to_string(),
                conditions: ConditionExpr::single("e 123"),
                ..Default::default()
            },
        ];
        registry
            .register(&pack, &entries, &LanguageCode::default_language())
            .expect("registered");
        registry
    }

    fn locations(eligible: &[&Destination]) -> Vec<String> {
        eligible.iter().map(|d| d.location().to_string()).collect()
    }

    #[test]
    fn when_standing_at_a_stop_then_it_is_excluded() {
        let registry = registry();
        let mut evaluator = MockConditionPort::new();
        evaluator.expect_evaluate().returning(|_, _| Ok(true));

        let eligible = filter_eligible(&registry, &location("Forest"), Some(&evaluator));

        assert_eq!(locations(&eligible), ["Railroad", "Desert"]);
    }

    #[test]
    fn when_condition_is_false_then_stop_is_hidden() {
        let registry = registry();
        let mut evaluator = MockConditionPort::new();
        evaluator.expect_evaluate().returning(|_, _| Ok(false));

        let eligible = filter_eligible(&registry, &location("Town"), Some(&evaluator));

        assert_eq!(locations(&eligible), ["Railroad", "Forest"]);
    }

    #[test]
    fn when_evaluator_is_missing_then_conditional_stops_are_hidden() {
        let registry = registry();

        let eligible = filter_eligible(&registry, &location("Town"), None);

        assert_eq!(locations(&eligible), ["Railroad", "Forest"]);
    }

    #[test]
    fn when_evaluator_errors_then_stop_is_hidden() {
        let registry = registry();
        let mut evaluator = MockConditionPort::new();
        evaluator
            .expect_evaluate()
            .returning(|expr, _| Err(ConditionError::invalid(expr.to_string(), "unknown query")));

        let eligible = filter_eligible(&registry, &location("Town"), Some(&evaluator));

        assert_eq!(locations(&eligible), ["Railroad", "Forest"]);
    }

    #[test]
    fn unconditional_stops_never_reach_the_evaluator() {
        let registry = registry();
        let mut evaluator = MockConditionPort::new();
        evaluator
            .expect_evaluate()
            .withf(|expr, ctx| {
                expr.clauses() == ["e 123".to_string()]
                    && ctx.network == NetworkKind::Train
                    && ctx.current_location.as_str() == "Town"
            })
            .times(1)
            .returning(|_, _| Ok(true));

        let eligible = filter_eligible(&registry, &location("Town"), Some(&evaluator));

        assert_eq!(eligible.len(), 3);
    }
}
