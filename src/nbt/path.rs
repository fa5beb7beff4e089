use crate::nbt::{Compound, NbtError, Result, TagKind, Value};

/// One parsed operation in a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a compound member by name.
	Member(String),
	/// Select a list or array element by zero-based index.
	Index(usize),
}

/// Parsed path expression such as `nested compound test.ham.name` or `"listTest (long)"[3]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NbtPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

/// Borrowed view of whatever a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
	/// A compound member.
	Value(&'a Value),
	/// The root compound or a compound list element.
	Compound(&'a Compound),
	/// Byte list or byte array element.
	Byte(i8),
	/// Short list element.
	Short(i16),
	/// Int list or int array element.
	Int(i32),
	/// Long list element.
	Long(i64),
	/// Float list element.
	Float(f32),
	/// Double list element.
	Double(f64),
	/// String list element.
	String(&'a str),
}

impl ValueRef<'_> {
	/// Tag kind of the referenced value.
	pub fn kind(&self) -> TagKind {
		match self {
			Self::Value(value) => value.kind(),
			Self::Compound(_) => TagKind::Compound,
			Self::Byte(_) => TagKind::Byte,
			Self::Short(_) => TagKind::Short,
			Self::Int(_) => TagKind::Int,
			Self::Long(_) => TagKind::Long,
			Self::Float(_) => TagKind::Float,
			Self::Double(_) => TagKind::Double,
			Self::String(_) => TagKind::String,
		}
	}
}

impl NbtPath {
	/// Parse dotted member syntax with optional `[index]` selectors.
	///
	/// Unquoted names run until `.`, `[`, `]` or `"`; a double-quoted name may
	/// contain any character, with `\` escaping the next one.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || NbtError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let mut chars = input.chars().peekable();
		let mut steps = Vec::new();

		loop {
			let mut name = String::new();
			if chars.next_if_eq(&'"').is_some() {
				loop {
					match chars.next() {
						Some('"') => break,
						Some('\\') => name.push(chars.next().ok_or_else(invalid)?),
						Some(ch) => name.push(ch),
						None => return Err(invalid()),
					}
				}
			} else {
				while let Some(ch) = chars.next_if(|ch| !matches!(*ch, '.' | '[' | ']' | '"')) {
					name.push(ch);
				}
				if name.is_empty() {
					return Err(invalid());
				}
			}
			steps.push(PathStep::Member(name));

			while chars.next_if_eq(&'[').is_some() {
				let mut digits = String::new();
				while let Some(ch) = chars.next_if(char::is_ascii_digit) {
					digits.push(ch);
				}
				if digits.is_empty() || chars.next() != Some(']') {
					return Err(invalid());
				}
				steps.push(PathStep::Index(digits.parse::<usize>().map_err(|_| invalid())?));
			}

			match chars.next() {
				None => break,
				Some('.') if chars.peek().is_some() => {}
				Some(_) => return Err(invalid()),
			}
		}

		Ok(Self { steps })
	}

	/// Walk the path from `root`.
	pub fn resolve<'a>(&self, root: &'a Compound) -> Result<ValueRef<'a>> {
		let mut current = ValueRef::Compound(root);
		let mut trail = String::new();

		for step in &self.steps {
			current = match step {
				PathStep::Member(name) => {
					push_member(&mut trail, name);
					let compound = match current {
						ValueRef::Compound(compound) | ValueRef::Value(Value::Compound(compound)) => compound,
						other => return Err(mismatch(&trail, TagKind::Compound, other)),
					};
					let value = compound.get(name).ok_or_else(|| NbtError::MissingMember { name: trail.clone() })?;
					ValueRef::Value(value)
				}
				PathStep::Index(index) => {
					trail.push_str(&format!("[{index}]"));
					match current {
						ValueRef::Value(Value::List(list)) => list.get(*index).ok_or(NbtError::IndexOutOfRange {
							index: *index,
							len: list.len(),
						})?,
						ValueRef::Value(Value::ByteArray(items)) => ValueRef::Byte(*element(items, *index)?),
						ValueRef::Value(Value::IntArray(items)) => ValueRef::Int(*element(items, *index)?),
						other => return Err(mismatch(&trail, TagKind::List, other)),
					}
				}
			};
		}

		Ok(current)
	}
}

fn push_member(trail: &mut String, name: &str) {
	if !trail.is_empty() {
		trail.push('.');
	}
	trail.push_str(name);
}

fn mismatch(trail: &str, expected: TagKind, got: ValueRef<'_>) -> NbtError {
	NbtError::TypeMismatch {
		name: trail.to_owned(),
		expected: expected.as_str(),
		got: got.kind().as_str(),
	}
}

fn element<T>(items: &[T], index: usize) -> Result<&T> {
	items.get(index).ok_or(NbtError::IndexOutOfRange { index, len: items.len() })
}
