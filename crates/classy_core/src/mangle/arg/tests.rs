use crate::mangle::{MangleError, SubstitutionTable, Typedefs, mangle_argument, mangle_arguments};

fn argument(text: &str) -> Result<String, MangleError> {
	mangle_argument(text, &Typedefs::new(), &mut SubstitutionTable::new())
}

fn arguments(text: &str) -> Result<String, MangleError> {
	mangle_arguments(text, &Typedefs::new(), &mut SubstitutionTable::new())
}

#[test]
fn strips_parameter_labels() {
	assert_eq!(argument("int count").expect("labelled int"), "i");
	assert_eq!(argument("int* p").expect("labelled pointer"), "Pi");
	assert_eq!(argument("Foo &out").expect("labelled reference"), "R3Foo");
	assert_eq!(argument("unsigned long long x").expect("labelled multi-word"), "y");
}

#[test]
fn leading_const_binds_to_first_indirection() {
	assert_eq!(argument("const char*").expect("const char*"), "PKc");
	assert_eq!(argument("char const*").expect("char const*"), "PKc");
	assert_eq!(argument("const int&").expect("const int&"), "RKi");
	assert_eq!(argument("const Foo * const * p").expect("nested const"), "PKPK3Foo");
}

#[test]
fn top_level_const_is_dropped() {
	assert_eq!(argument("const int").expect("const int"), "i");
	assert_eq!(argument("int const").expect("int const"), "i");
	assert_eq!(argument("char * const name").expect("const pointer"), "Pc");
}

#[test]
fn builtin_label_is_rejected() {
	let err = argument("int int").expect_err("builtin label should fail");
	assert_eq!(err, MangleError::InvalidIdentifier { name: "int".to_owned() });

	let err = argument("Foo* 1x").expect_err("numeric label should fail");
	assert_eq!(err, MangleError::InvalidIdentifier { name: "1x".to_owned() });
}

#[test]
fn unsupported_syntax_is_rejected() {
	for text in ["void (*cb)(int)", "std::vector<int>", "Foo&& moved"] {
		let err = argument(text).expect_err("unsupported syntax should fail");
		assert!(matches!(err, MangleError::NotSupported { .. }), "{text}: {err:?}");
	}
}

#[test]
fn extra_type_words_are_invalid_decorators() {
	let err = argument("Foo Bar baz").expect_err("two type words should fail");
	assert_eq!(err, MangleError::InvalidDecorator { token: "Bar".to_owned() });
}

#[test]
fn repeated_leading_const_is_rejected() {
	let err = argument("const int const*").expect_err("double const should fail");
	assert!(matches!(err, MangleError::MultipleConst { .. }));
}

#[test]
fn nothing_left_is_no_argument_type() {
	assert!(matches!(argument("const"), Err(MangleError::NoArgumentType { .. })));
	assert!(matches!(arguments("int, "), Err(MangleError::NoArgumentType { .. })));
}

#[test]
fn void_argument_lists() {
	assert_eq!(arguments("").expect("empty"), "v");
	assert_eq!(arguments("   ").expect("blank"), "v");
	assert_eq!(arguments("void").expect("void"), "v");
	assert_eq!(arguments(" void ").expect("spaced void"), "v");
	assert_eq!(arguments("void*").expect("void pointer"), "Pv");
}

#[test]
fn arguments_share_substitutions() {
	assert_eq!(arguments("int*, int*, const int*, int const*").expect("pointer list"), "PiS_PKiS1_");
	assert_eq!(arguments("Foo::Bar*, Foo::Bar**, Foo::Baz").expect("qualified list"), "PN3Foo3BarEPS1_NS_3BazE");
}

#[test]
fn typedefs_apply_before_normalization() {
	let typedefs: Typedefs = [("u64", "unsigned long long"), ("Str", "std::string")].into_iter().collect();
	let mut subs = SubstitutionTable::new();

	let mangled = mangle_arguments("u64 size, Str, Str& out", &typedefs, &mut subs).expect("typedef arguments");
	assert_eq!(mangled, "yN3std6stringERS0_");
}
