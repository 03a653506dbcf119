/*!
The exact back-end.

Per answer, the result is the canonicalized sentence itself: the probability is exact in the sense that the sentence describes precisely the worlds in which the answer holds, and no number is computed.

Negation is not handled: a program with a negative body literal, or a negative query, is an [UnsupportedOperation](crate::types::err::ProbabilityError::UnsupportedOperation) for this back-end.
*/

use crate::{
    context::GenericContext,
    reports::AnswerSet,
    structures::literal::Literal,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// The answers to the query, each with its canonical sentence.
    pub fn exact(&mut self, goal: &Literal) -> Result<AnswerSet, ErrorKind> {
        if !goal.polarity || self.clause_db.has_negation() {
            return Err(err::ProbabilityError::UnsupportedOperation.into());
        }

        self.query(goal)
    }
}
