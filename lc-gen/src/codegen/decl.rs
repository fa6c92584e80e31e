//! Top-level declaration lowering (§4.6). A class doesn't become a real
//! layout, just a comment followed by its members: methods become
//! `ClassName_methodName` labels, constructors become
//! `ClassName_constructor` — there is no field storage anywhere in this
//! generator, so a class is really just a namespace for label prefixes.

use lc_par::ast::Node;

use super::{CoarseType, Generator};

const ARG_REGISTERS: [&str; 4] = ["rcx", "rdx", "r8", "r9"];

impl Generator {
    pub(crate) fn generate_declaration(&mut self, node: &Node) {
        match node {
            Node::Class { name, members, .. } => self.generate_class(name, members),
            Node::Function { .. } => self.generate_function(node, None),
            Node::Namespace { body, .. } => {
                for decl in body {
                    self.generate_declaration(decl);
                }
            }
            // Interfaces carry no bodies to lower; imports are resolved at
            // parse time, not codegen time.
            Node::Interface { .. } | Node::Import { .. } | Node::FromImport { .. } => {}
            // The grammar allows a bare statement at top level when no
            // declaration keyword is present (§4.5); lower it the same way
            // a function body statement would be.
            other => self.generate_statement(other),
        }
    }

    fn generate_class(&mut self, class_name: &str, members: &[Node]) {
        self.emit(format!("; Class: {class_name}"));
        for member in members {
            match member {
                Node::Constructor { .. } => self.generate_constructor(member, class_name),
                Node::Function { .. } => self.generate_function(member, Some(class_name)),
                _ => {}
            }
        }
    }

    fn generate_constructor(&mut self, node: &Node, class_name: &str) {
        let Node::Constructor { params, super_call, body, .. } = node else {
            return;
        };
        let constructor_name = format!("{class_name}_constructor");
        self.current_function = constructor_name.clone();
        self.local_vars = Default::default();
        self.local_var_types = Default::default();
        self.stack_offset = 0;

        self.emit(format!("{constructor_name}:"));
        self.emit("    push rbp");
        self.emit("    mov rbp, rsp");
        self.emit(String::new());

        for (i, param) in params.iter().enumerate() {
            let register = ARG_REGISTERS
                .get(i)
                .map(|r| r.to_string())
                .unwrap_or_else(|| format!("[rbp+{}]", 16 + 8 * i));
            let slot = format!("[rbp-{}]", 8 * (i + 1));
            self.local_vars.insert(param.name.clone(), slot.clone());
            self.emit(format!("    mov {slot}, {register}"));
            self.stack_offset += 8;
        }

        if super_call.is_some() {
            self.emit("    ; Super constructor call");
        }

        for stmt in body {
            self.generate_statement(stmt);
        }

        self.emit(String::new());
        self.emit(format!("{constructor_name}_end:"));
        self.emit("    mov rsp, rbp");
        self.emit("    pop rbp");
        self.emit("    ret");
        self.emit(String::new());
    }

    fn generate_function(&mut self, node: &Node, class_name: Option<&str>) {
        let Node::Function { name, params, body, .. } = node else {
            return;
        };
        let func_name = match class_name {
            Some(class) => format!("{class}_{name}"),
            None => name.clone(),
        };
        self.current_function = func_name.clone();
        self.local_vars = Default::default();
        self.local_var_types = Default::default();
        self.stack_offset = 0;

        self.emit(format!("{func_name}:"));
        self.emit("    push rbp");
        self.emit("    mov rbp, rsp");
        self.emit("    sub rsp, 128    ; Allocate stack space for local variables + shadow space");
        self.emit(String::new());

        for (i, param) in params.iter().enumerate() {
            let register = ARG_REGISTERS
                .get(i)
                .map(|r| r.to_string())
                .unwrap_or_else(|| format!("[rbp+{}]", 32 + 8 * i));
            let slot = format!("[rbp-{}]", 8 * (i + 1));
            self.local_vars.insert(param.name.clone(), slot.clone());
            // Parameters are assumed int for printing purposes (§4.6); this
            // generator has no real parameter type checking.
            self.local_var_types.insert(param.name.clone(), CoarseType::Int);
            self.emit(format!("    mov {slot}, {register}"));
            self.stack_offset += 8;
        }

        if let Some(body) = body {
            for stmt in body {
                self.generate_statement(stmt);
            }
        }

        self.emit(String::new());
        self.emit(format!("{func_name}_end:"));
        self.emit("    mov rsp, rbp");
        self.emit("    pop rbp");
        self.emit("    ret");
        self.emit(String::new());
    }
}
