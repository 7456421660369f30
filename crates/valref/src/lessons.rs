//! Executable playground lessons
//!
//! Each [`Lesson`] replays one playground against the library and records
//! what the playground margin would show next to each line.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::collections::{Dictionary, Set};
use crate::container::{any_power, Mutability, ValueContainer};
use crate::error::Result;
use crate::generator::{AnyGenerator, ConstantGenerator, FibonacciGenerator};
use crate::manager::{Window, WindowIds, WindowManager};
use crate::shared::SharedArray;

/// The playgrounds that can be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    /// Value semantics of arrays vs. a manager passed by reference
    ArraysAndMutability,

    /// Closures, map, filter and reduce
    TransformingArrays,

    /// Generators and sequences
    CollectionProtocols,

    /// Dictionary and set literals and mutation
    DictionariesAndSets,
}

/// One evaluated line: the expression and the value shown beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// The source expression
    pub expression: String,

    /// The rendered result
    pub value: String,
}

/// Everything one lesson produced.
#[derive(Debug, Clone, Serialize)]
pub struct LessonReport {
    /// Which lesson ran
    pub lesson: Lesson,

    /// Human-readable title
    pub title: &'static str,

    /// Annotations in evaluation order
    pub annotations: Vec<Annotation>,
}

impl LessonReport {
    /// Find the value shown for `expression`, if it was evaluated.
    pub fn value_of(&self, expression: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.expression == expression)
            .map(|a| a.value.as_str())
    }
}

impl fmt::Display for LessonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        let width = self
            .annotations
            .iter()
            .map(|a| a.expression.len())
            .max()
            .unwrap_or(0);
        for a in &self.annotations {
            writeln!(f, "{:<width$}  // {}", a.expression, a.value, width = width)?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Margin {
    annotations: Vec<Annotation>,
}

impl Margin {
    fn show(&mut self, expression: &str, value: impl fmt::Display) {
        self.annotations.push(Annotation {
            expression: expression.to_string(),
            value: value.to_string(),
        });
    }

    /// Record an operation that is expected to be rejected.
    fn show_outcome<T: fmt::Debug>(&mut self, expression: &str, outcome: Result<T>) {
        match outcome {
            Ok(value) => self.show(expression, format!("{:?}", value)),
            Err(e) => self.show(expression, format!("error: {}", e)),
        }
    }
}

fn joined<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Lesson {
    /// Every lesson, in playground order.
    pub const ALL: [Lesson; 4] = [
        Lesson::TransformingArrays,
        Lesson::CollectionProtocols,
        Lesson::ArraysAndMutability,
        Lesson::DictionariesAndSets,
    ];

    /// The playground title.
    pub fn title(self) -> &'static str {
        match self {
            Lesson::TransformingArrays => "3.2 Transforming Arrays",
            Lesson::CollectionProtocols => "3.4 Collections and Protocols",
            Lesson::ArraysAndMutability => "4.1 Arrays and Mutability",
            Lesson::DictionariesAndSets => "4.3 Dictionaries and Sets",
        }
    }

    /// Replay the lesson.
    pub fn run(self) -> Result<LessonReport> {
        tracing::debug!(lesson = ?self, "running lesson");
        let mut margin = Margin::default();
        match self {
            Lesson::ArraysAndMutability => arrays_and_mutability(&mut margin)?,
            Lesson::TransformingArrays => transforming_arrays(&mut margin),
            Lesson::CollectionProtocols => collection_protocols(&mut margin),
            Lesson::DictionariesAndSets => dictionaries_and_sets(&mut margin)?,
        }
        tracing::debug!(lesson = ?self, lines = margin.annotations.len(), "lesson finished");
        Ok(LessonReport {
            lesson: self,
            title: self.title(),
            annotations: margin.annotations,
        })
    }
}

fn arrays_and_mutability(margin: &mut Margin) -> Result<()> {
    let mut original_array = ValueContainer::mutable([1, 2]);
    let mut copy_of_array = original_array.copy_as(Mutability::Immutable);
    margin.show(
        "copyOfArray shares storage",
        original_array.shares_buffer_with(&copy_of_array),
    );

    original_array.append(3)?;
    margin.show("originalArray", &original_array);
    margin.show("copyOfArray", &copy_of_array);
    margin.show(
        "copyOfArray shares storage",
        original_array.shares_buffer_with(&copy_of_array),
    );
    margin.show_outcome("copyOfArray.append(4)", copy_of_array.append(4));
    margin.show_outcome("copyOfArray[3]", copy_of_array.read(3));

    let mut ids = WindowIds::new();
    let original_window_manager = WindowManager::new();
    for id in ids.by_ref().take(2) {
        original_window_manager.add_record(Window { id })?;
    }
    margin.show(
        "originalWindowManager.windows",
        original_window_manager.records(),
    );

    let copy_of_window_manager = original_window_manager.clone();
    if let Some(id) = ids.next() {
        original_window_manager.add_record(Window { id })?;
    }
    margin.show(
        "copyOfWindowManager.windows",
        copy_of_window_manager.records(),
    );
    margin.show(
        "copyOfWindowManager === originalWindowManager",
        copy_of_window_manager.same_identity(&original_window_manager),
    );

    let original_mutable_array = SharedArray::new(["foo", "bar"]);
    let copy_of_mutable_array = original_mutable_array.view();
    margin.show(
        "copyOfMutableArray.lastObject",
        copy_of_mutable_array.last().unwrap_or_default(),
    );
    original_mutable_array.push("baz");
    margin.show(
        "copyOfMutableArray.lastObject",
        copy_of_mutable_array.last().unwrap_or_default(),
    );
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct CarRental {
    price: f64,
    hours: f64,
}

fn transforming_arrays(margin: &mut Margin) {
    let squared = any_power(2);
    let cubed = any_power(3);
    let fourth_power = any_power(4);
    margin.show("squared(12)", squared(12));
    margin.show("cubed(3)", cubed(3));
    margin.show("fourthPower(10)", fourth_power(10));

    let one_two_three = ValueContainer::immutable([1_i64, 2, 3]);
    let some_thing = one_two_three.map(|x| fourth_power(*x));
    margin.show("someThing", &some_thing);
    margin.show(
        "someThing.last",
        some_thing
            .last()
            .map_or_else(|| "nil".to_string(), i64::to_string),
    );

    let evens = ValueContainer::immutable([2, 4, 6, 8, 10, 12, 14, 16, 18]);
    margin.show("divisibleByThree", evens.filter(|value| value % 3 == 0));

    let this_months_rentals = ValueContainer::immutable([
        CarRental {
            price: 29.99,
            hours: 24.0,
        },
        CarRental {
            price: 99.50,
            hours: 168.0,
        },
        CarRental {
            price: 15.25,
            hours: 2.5,
        },
    ]);
    let balance_forward = 77.50;
    let total_hours = this_months_rentals.reduce(balance_forward, |total, r| total + r.hours);
    let total_price = this_months_rentals.reduce(balance_forward, |total, r| total + r.price);
    margin.show("total (hours)", format!("{:.2}", total_hours));
    margin.show("total (price)", format!("{:.2}", total_price));
}

// The explicit `while let` is the desugared form of `for i in x`.
#[allow(clippy::while_let_on_iterator)]
fn collection_protocols(margin: &mut Margin) {
    margin.show(
        "aConstantGenerator.next() x5",
        joined(ConstantGenerator::new(1).take(5)),
    );
    margin.show(
        "aFibonacciGenerator.next() x10",
        joined(FibonacciGenerator::new().take(10)),
    );

    let x = ValueContainer::immutable([1, 2, 3]);
    let mut g = x.iter();
    let mut seen = Vec::new();
    while let Some(i) = g.next() {
        seen.push(*i);
    }
    margin.show("while let i = g.next()", joined(seen));

    let mut state = (0_u64, 1_u64);
    let any_generator = AnyGenerator::new(move || {
        let value = state.0;
        let following = state.0.checked_add(state.1)?;
        state = (state.1, following);
        Some(value)
    });
    margin.show("anyGenerator.next() x10", joined(any_generator.take(10)));
}

fn dictionaries_and_sets(margin: &mut Margin) -> Result<()> {
    let shakespeare_words =
        ValueContainer::immutable(["afeard", "anon", "apace", "apparel", "arrant"]);
    margin.show("shakespeareWords", &shakespeare_words);

    let mut shakespeare_dictionary = Dictionary::immutable([
        ("afeard", "afraid, frightened, scared"),
        ("anon", "soon, shortly, presently"),
        ("apace", "quickly, speedily, at a great rate"),
        ("apparel", "clothes, clothing, dress"),
        ("arrant", "downright, absolute, unmitigated"),
    ]);
    margin.show(
        "shakespeareDictionary[\"arrant\"]",
        shakespeare_dictionary
            .get(&"arrant")
            .copied()
            .unwrap_or("nil"),
    );
    if let Some((word, definition)) = shakespeare_dictionary.first() {
        margin.show("firstWordAndDefinition.0 (insertion order)", word);
        margin.show("firstWordAndDefinition.1 (insertion order)", definition);
    }
    margin.show_outcome(
        "shakespeareDictionary[\"anon\"] = \"later\"",
        shakespeare_dictionary.insert("anon", "later"),
    );

    let mut physicist_dictionary = Dictionary::mutable([
        ("trivial", "true and could not be otherwise"),
        ("obvious", "true but requires an argument to see"),
    ]);
    physicist_dictionary.insert(
        "interesting",
        "probably true, but it requires a crafty argument",
    )?;
    margin.show("physicistDictionary.count", physicist_dictionary.len());

    let mut shakespeare_words_as_set =
        Set::immutable(["afeard", "anon", "apace", "apparel", "arrant"]);
    margin.show(
        "shakespeareWordsAsSet.count",
        shakespeare_words_as_set.len(),
    );
    margin.show(
        "shakespeareWordsAsSet.contains(\"anon\")",
        shakespeare_words_as_set.contains(&"anon"),
    );
    margin.show_outcome(
        "shakespeareWordsAsSet.insert(\"forsooth\")",
        shakespeare_words_as_set.insert("forsooth"),
    );

    let mut physicist_words_as_set = Set::mutable(["trivial", "obvious"]);
    margin.show(
        "physicistWordsAsSet.insert(\"interesting\")",
        physicist_words_as_set.insert("interesting")?,
    );
    let verdict = if physicist_words_as_set.contains(&"counter-intuitive") {
        "Counter-intuitive is already in the set."
    } else {
        "Counter-intuitive needs to be added."
    };
    margin.show(
        "physicistWordsAsSet.contains(\"counter-intuitive\")",
        verdict,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_lesson_runs() {
        for lesson in Lesson::ALL {
            let report = lesson.run().unwrap();
            assert!(!report.annotations.is_empty(), "{:?} was empty", lesson);
            assert_eq!(report.title, lesson.title());
        }
    }

    #[test]
    fn test_report_display_aligns_comments() {
        let report = LessonReport {
            lesson: Lesson::TransformingArrays,
            title: "T",
            annotations: vec![
                Annotation {
                    expression: "a".into(),
                    value: "1".into(),
                },
                Annotation {
                    expression: "abc".into(),
                    value: "2".into(),
                },
            ],
        };
        assert_eq!(report.to_string(), "## T\na    // 1\nabc  // 2\n");
    }
}
