/*!
The probability back-ends, operating on the sentence-annotated answers of a query.

- [exact] reports the canonical sentence of each answer, and no number.
- [montecarlo] samples worlds from the declared distributions and estimates each answer's probability.

A third, trivial, mode --- answers only, sentences ignored --- needs no back-end and is left to the shell.
*/

pub mod exact;
pub mod montecarlo;
