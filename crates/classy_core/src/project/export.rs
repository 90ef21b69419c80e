use serde::Serialize;

use crate::project::{ClassId, MethodId, MethodKind, Project, Result, VirtualBody};

/// One addressed method as handed to a disassembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
	/// Function body address.
	pub address: u64,
	/// Mangled symbol.
	pub symbol: String,
	/// Method the symbol belongs to.
	pub method: MethodId,
	/// Owning class name.
	pub owner: Option<String>,
	/// [`MethodKind::type_name`] of the method.
	pub kind: &'static str,
	/// Readable signature including owner and return type.
	pub signature: String,
}

fn body_suffix(body: VirtualBody) -> &'static str {
	match body {
		VirtualBody::Implemented => "",
		VirtualBody::PureVirtual => " = 0",
		VirtualBody::Deleted => " = delete",
	}
}

impl Project {
	/// Mangled symbols of every method with an address, ordered by address.
	pub fn symbols(&self) -> Result<Vec<SymbolEntry>> {
		let mut symbols = Vec::new();
		for (id, method) in self.methods() {
			let Some(address) = method.address else {
				continue;
			};
			let owner = self.owner_name(method)?;
			symbols.push(SymbolEntry {
				address,
				symbol: method.signature.mangle(owner, &self.typedefs)?,
				method: id,
				owner: owner.map(str::to_owned),
				kind: method.kind.type_name(),
				signature: method.signature.render(owner, true),
			});
		}
		symbols.sort_by_key(|entry| entry.address);
		Ok(symbols)
	}

	/// C++ definition of one class: overrides, new virtuals, then regular methods.
	pub fn class_definition(&self, id: ClassId) -> Result<String> {
		let class = self.class(id)?;
		let mut lines = vec![match class.base {
			Some(base) => format!("class {} : public {}", class.name, self.class(base)?.name),
			None => format!("class {}", class.name),
		}];
		lines.push("{".to_owned());
		lines.push("public:".to_owned());

		let dtor_name = format!("~{}", class.short_name());
		let mut seen_dtor = false;
		let mut dtor_once = |name: &str| {
			if name != dtor_name {
				return true;
			}
			!std::mem::replace(&mut seen_dtor, true)
		};

		let table = self.vtable(id)?;
		let inherited = match class.base {
			Some(base) => self.vtable(base)?.len(),
			None => 0,
		};

		let mut overrides = Vec::new();
		for &mid in &table[..inherited] {
			let method = self.method(mid)?;
			let MethodKind::Override { body, .. } = method.kind else {
				continue;
			};
			if method.owner != Some(id) || !dtor_once(&method.signature.name) {
				continue;
			}
			let decl = method.signature.render(None, true);
			if method.signature.name.starts_with('~') {
				overrides.push(format!("    virtual {decl}{};", body_suffix(body)));
			} else {
				overrides.push(format!("    {decl} override{};", body_suffix(body)));
			}
		}

		let mut virtuals = Vec::new();
		for &mid in &table[inherited..] {
			let method = self.method(mid)?;
			let MethodKind::Virtual { body, .. } = method.kind else {
				continue;
			};
			if dtor_once(&method.signature.name) {
				virtuals.push(format!("    virtual {}{};", method.signature.render(None, true), body_suffix(body)));
			}
		}

		let mut regular = Vec::new();
		for mid in self.class_methods(id) {
			let method = self.method(mid)?;
			if method.kind == MethodKind::Regular && dtor_once(&method.signature.name) {
				regular.push(format!("    {};", method.signature.render(None, true)));
			}
		}

		let sections: Vec<Vec<String>> = [overrides, virtuals, regular].into_iter().filter(|section| !section.is_empty()).collect();
		for (idx, section) in sections.into_iter().enumerate() {
			if idx > 0 {
				lines.push(String::new());
			}
			lines.extend(section);
		}
		lines.push("};".to_owned());

		let mut out = lines.join("\n");
		out.push('\n');
		Ok(out)
	}

	/// Header with the project's typedefs and every class definition.
	pub fn render_header(&self) -> Result<String> {
		let mut out = String::from("/*\n * Classy exported symbols\n */\n");

		if !self.typedefs.is_empty() {
			out.push_str("\n/*\n * Typedefs\n */\n\n");
			out.push_str(&self.render_typedefs());
		}

		if self.class_count() > 0 {
			out.push_str("\n/*\n * Classes\n */\n");
			for (id, _) in self.classes() {
				out.push('\n');
				out.push_str(&self.class_definition(id)?);
			}
		}
		Ok(out)
	}
}
