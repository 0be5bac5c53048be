use exprtree::{Error, Value, get_result, parse, visit};
use rand::{Rng, SeedableRng, rngs::StdRng};

const FUNCTIONS: [&str; 6] = ["sin", "cos", "tan", "log", "exp", "sqrt"];
const OPERATORS: [&str; 4] = ["+", "-", "*", "/"];
const COMPARISONS: [&str; 6] = ["<", "<=", ">", ">=", "==", "!="];

/// Budgets for one generated expression: parentheses, operators,
/// function calls and number literals still to be spent.
#[derive(Clone, Copy)]
struct Budget {
    parens:    u32,
    operators: u32,
    functions: u32,
    numbers:   u32,
}

struct Generator {
    rng: StdRng,
}

impl Generator {
    fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    fn budget(&mut self) -> Budget {
        Budget { parens:    self.rng.gen_range(0..6),
                 operators: self.rng.gen_range(0..6),
                 functions: self.rng.gen_range(0..5),
                 numbers:   self.rng.gen_range(0..9), }
    }

    fn number(&mut self) -> String {
        let whole = self.rng.gen_range(0..1000);
        let fraction = self.rng.gen_range(0..100);
        match self.rng.gen_range(0..4) {
            0 => format!("{whole}"),
            1 => format!("{whole}."),
            2 => format!(".{fraction}"),
            _ => format!("{whole}.{fraction}"),
        }
    }

    /// A numeric expression, built by splitting the budget the way a
    /// hand-written one would nest.
    fn arithmetic(&mut self, b: Budget) -> String {
        let mut actions = Vec::new();
        if b.functions > 0 {
            actions.push(0);
        }
        if b.parens > 0 {
            actions.push(1);
        }
        if b.operators > 0 || b.numbers > 1 {
            actions.push(2);
        }
        if actions.is_empty() {
            return if self.rng.gen_bool(0.2) {
                format!("-{}", self.number())
            } else {
                self.number()
            };
        }

        match actions[self.rng.gen_range(0..actions.len())] {
            0 => {
                let name = FUNCTIONS[self.rng.gen_range(0..FUNCTIONS.len())];
                let inner = self.arithmetic(Budget { functions: b.functions - 1,
                                                     ..b });
                format!("{name}({inner})")
            },
            1 => {
                let inner = self.arithmetic(Budget { parens: b.parens - 1,
                                                     ..b });
                format!("({inner})")
            },
            _ => {
                let (left, right) = self.split(b);
                let op = OPERATORS[self.rng.gen_range(0..OPERATORS.len())];
                format!("{} {op} {}", self.arithmetic(left), self.arithmetic(right))
            },
        }
    }

    fn split(&mut self, b: Budget) -> (Budget, Budget) {
        let functions = self.rng.gen_range(0..=b.functions);
        let parens = self.rng.gen_range(0..=b.parens);
        let operators = if b.operators > 0 { self.rng.gen_range(0..b.operators) } else { 0 };
        let numbers = if b.numbers > 1 { self.rng.gen_range(1..b.numbers) } else { 1 };
        let left = Budget { parens,
                            operators,
                            functions,
                            numbers };
        let right = Budget { parens:    b.parens - parens,
                             operators: b.operators.saturating_sub(1 + operators),
                             functions: b.functions - functions,
                             numbers:   b.numbers.saturating_sub(numbers), };
        (left, right)
    }

    /// Mixes comparisons, logic and conditionals into an arithmetic core.
    fn expression(&mut self) -> String {
        let budget = self.budget();
        let core = self.arithmetic(budget);
        match self.rng.gen_range(0..4) {
            0 => core,
            1 => {
                let cmp = COMPARISONS[self.rng.gen_range(0..COMPARISONS.len())];
                let budget = self.budget();
                let other = self.arithmetic(budget);
                format!("{core} {cmp} {other}")
            },
            2 => {
                let (first, second) = (self.budget(), self.budget());
                let other = self.arithmetic(first);
                let fallback = self.arithmetic(second);
                format!("{core} < {other} or !true ? {core} : -{fallback}")
            },
            _ => {
                let budget = self.budget();
                let other = self.arithmetic(budget);
                format!("({core} >= 1 and {other} != 0) == false")
            },
        }
    }

    /// Corrupts a valid expression so that no reading of it parses.
    fn malformed(&mut self, valid: &str) -> String {
        match self.rng.gen_range(0..5) {
            0 => format!("{valid} +"),
            1 => format!("){valid}"),
            2 => format!("({valid}"),
            3 => format!("fake({valid})"),
            _ => format!("{valid} = 1"),
        }
    }
}

fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

#[test]
fn canonical_text_reparses_to_the_same_value() {
    let mut generator = Generator::new(0x5eed);

    for _ in 0..2000 {
        let source = generator.expression();
        let tree = parse(&source).unwrap_or_else(|e| panic!("{source}: {e}"));
        let canonical = visit(&tree);
        let reparsed = parse(&canonical).unwrap_or_else(|e| panic!("{canonical}: {e}"));

        match (tree.evaluate(), reparsed.evaluate()) {
            (Ok(a), Ok(b)) => assert!(same_value(&a, &b), "{source} => {canonical}: {a} vs {b}"),
            (Err(a), Err(b)) => assert_eq!(a, b, "{source} => {canonical}"),
            (a, b) => panic!("{source} => {canonical}: {a:?} vs {b:?}"),
        }

        // Printing is stable once canonical.
        assert_eq!(visit(&reparsed), canonical);
    }
}

#[test]
fn malformed_expressions_are_rejected() {
    let mut generator = Generator::new(42);

    for _ in 0..1000 {
        let valid = generator.expression();
        let broken = generator.malformed(&valid);
        assert!(matches!(get_result(&broken), Err(Error::Syntax(_))), "{broken} should not parse");
    }
}
