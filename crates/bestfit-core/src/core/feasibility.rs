use super::models::solution::Candidate;

/// Outcome of checking a candidate against its constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feasibility {
    Feasible,
    MissingObjective,
    NonFiniteObjective(f64),
    ViolatedConstraint { index: usize, residual: f64 },
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible)
    }
}

/// A candidate is feasible iff its objective is a finite number and every
/// constraint residual is `<= 0`. A missing or null objective is infeasible.
pub fn assess(candidate: &Candidate) -> Feasibility {
    match candidate.objective {
        None => return Feasibility::MissingObjective,
        Some(value) if !value.is_finite() => return Feasibility::NonFiniteObjective(value),
        Some(_) => {}
    }

    // NaN residuals count as violations.
    candidate
        .constraint
        .residuals()
        .iter()
        .copied()
        .enumerate()
        .find(|(_, residual)| residual.is_nan() || *residual > 0.0)
        .map_or(Feasibility::Feasible, |(index, residual)| {
            Feasibility::ViolatedConstraint { index, residual }
        })
}

pub fn is_feasible(candidate: &Candidate) -> bool {
    assess(candidate).is_feasible()
}

/// The objective of a feasible candidate, `worst_value` otherwise.
pub fn effective_objective(candidate: &Candidate, worst_value: f64) -> f64 {
    match (assess(candidate), candidate.objective) {
        (Feasibility::Feasible, Some(objective)) => objective,
        _ => worst_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::solution::Constraint;

    #[test]
    fn unconstrained_finite_objective_is_feasible() {
        assert!(is_feasible(&Candidate::new(5.0)));
    }

    #[test]
    fn constraint_exactly_zero_is_feasible() {
        let candidate = Candidate::new(1.0).with_constraint(Constraint::Scalar(0.0));
        assert_eq!(assess(&candidate), Feasibility::Feasible);
    }

    #[test]
    fn any_positive_residual_is_a_violation() {
        let candidate =
            Candidate::new(1.0).with_constraint(Constraint::Vector(vec![-1.0, 0.0, 1e-12, -3.0]));
        assert_eq!(
            assess(&candidate),
            Feasibility::ViolatedConstraint {
                index: 2,
                residual: 1e-12
            }
        );
    }

    #[test]
    fn nan_residual_is_a_violation() {
        let candidate = Candidate::new(1.0).with_constraint(Constraint::Scalar(f64::NAN));
        assert!(!is_feasible(&candidate));
    }

    #[test]
    fn missing_objective_is_infeasible() {
        let candidate = Candidate::default();
        assert_eq!(assess(&candidate), Feasibility::MissingObjective);
    }

    #[test]
    fn non_finite_objective_is_infeasible() {
        let candidate = Candidate::new(f64::INFINITY);
        assert!(matches!(
            assess(&candidate),
            Feasibility::NonFiniteObjective(v) if v.is_infinite()
        ));
    }

    #[test]
    fn effective_objective_substitutes_worst_value_when_infeasible() {
        let infeasible = Candidate::new(-100.0).with_constraint(Constraint::Scalar(1.0));
        assert_eq!(effective_objective(&infeasible, 1e308), 1e308);
        assert_eq!(effective_objective(&Candidate::new(-100.0), 1e308), -100.0);
    }
}
