//! Statement lowering (§4.6). Label numbering is one counter shared
//! across every kind of statement — an `if` and a `while` elsewhere in
//! the same function do not reset each other's numbering, matching the
//! grounding source's single `get_next_label` sequence.

use lc_par::ast::{CatchBlock, MatchCase, Node, SwitchCase, Type};

use super::{CoarseType, Generator};

impl Generator {
    pub(crate) fn generate_statement(&mut self, node: &Node) {
        match node {
            Node::ExprStmt { expr } => self.generate_expression(expr),
            Node::Return { value } => {
                if let Some(value) = value {
                    self.generate_expression(value);
                }
                self.emit(format!("    jmp {}_end", self.current_function));
            }
            Node::VarDecl { name, var_type, init } => self.generate_var_decl(name, var_type, init.as_deref()),
            Node::Assignment { name, value } => self.generate_assignment(name, value),
            // No field storage exists anywhere in this generator (§4.6);
            // a member assignment can only evaluate its value for effect.
            Node::MemberAssignment { value, .. } => {
                self.generate_expression(value);
                self.emit("    ; Member assignment (no real field storage)");
            }
            Node::If { cond, then_branch, else_branch } => self.generate_if(cond, then_branch, else_branch.as_deref()),
            Node::While { cond, body } => self.generate_while(cond, body),
            Node::DoWhile { cond, body } => self.generate_do_while(cond, body),
            Node::For { init, condition, update, body } => {
                self.generate_for(init.as_deref(), condition.as_deref(), update.as_deref(), body)
            }
            Node::Switch { expr, cases, default } => self.generate_switch(expr, cases, default.as_deref()),
            Node::Match { expr, cases, default } => self.generate_match(expr, cases, default.as_deref()),
            Node::Try { try_block, catch_blocks, finally_block } => {
                self.generate_try(try_block, catch_blocks, finally_block.as_deref())
            }
            Node::Throw { expr } => {
                self.emit("    ; Throw");
                self.generate_expression(expr);
            }
            // Loop control is deliberately a no-op (§9): there's no real
            // loop-frame bookkeeping to unwind to.
            Node::Break => self.emit("    ; Break statement - simplified"),
            Node::Continue => self.emit("    ; Continue statement - simplified"),
            Node::Block { body } => {
                for stmt in body {
                    self.generate_statement(stmt);
                }
            }
            other => self.emit(format!("    ; Unknown statement type: {other:?}")),
        }
    }

    /// Best-effort guess at what an expression evaluates to, used only to
    /// pick a `println` wrapper and to decide whether a variable's type
    /// changed (§4.6). Every call not named in the int-returning set is
    /// assumed to return int too — matching the grounding source, which
    /// has no real return-type inference for user functions.
    fn infer_coarse_type(&self, expr: &Node) -> CoarseType {
        match expr {
            Node::String { .. } => CoarseType::String,
            Node::Number(_) | Node::Binary { .. } | Node::Call { .. } => CoarseType::Int,
            _ => CoarseType::String,
        }
    }

    fn generate_var_decl(&mut self, name: &str, var_type: &Option<Type>, init: Option<&Node>) {
        self.stack_offset += 8;
        let slot = format!("[rbp-{}]", self.stack_offset);
        self.local_vars.insert(name.to_string(), slot.clone());

        let is_bare_dynamic = init.is_none() && matches!(var_type, Some(Type::Named(t)) if t == "dynamic");
        if is_bare_dynamic {
            self.local_var_types.insert(name.to_string(), CoarseType::Dynamic);
            self.emit(format!("    mov qword {slot}, 0  ; Initialize dynamic variable"));
            return;
        }

        match init {
            Some(init) => {
                let ty = self.infer_coarse_type(init);
                self.local_var_types.insert(name.to_string(), ty);
                self.generate_expression(init);
                self.emit(format!("    mov {slot}, rax"));
            }
            None => {
                self.local_var_types.insert(name.to_string(), CoarseType::Int);
            }
        }
    }

    fn generate_assignment(&mut self, name: &str, value: &Node) {
        if !self.local_vars.contains_key(name) {
            self.stack_offset += 8;
            let slot = format!("[rbp-{}]", self.stack_offset);
            self.local_vars.insert(name.to_string(), slot);
            self.local_var_types.insert(name.to_string(), CoarseType::Int);
        }

        let current_type = *self.local_var_types.get(name).unwrap_or(&CoarseType::Int);
        let new_type = match value {
            Node::String { .. } => CoarseType::String,
            Node::Number(_) => CoarseType::Int,
            Node::Binary { op, .. } if matches!(op.as_str(), "+" | "-" | "*" | "/" | "%") => CoarseType::Int,
            Node::Call { .. } => CoarseType::Int,
            _ if current_type == CoarseType::Dynamic => CoarseType::Int,
            _ => current_type,
        };

        if current_type == CoarseType::Dynamic || current_type != new_type {
            self.local_var_types.insert(name.to_string(), new_type);
            self.emit(format!(
                "    ; Variable '{name}' type: {} -> {}",
                current_type.as_str(),
                new_type.as_str()
            ));
        }

        self.generate_expression(value);
        let slot = self.local_vars.get(name).expect("just inserted above").clone();
        self.emit(format!("    mov {slot}, rax"));
    }

    fn generate_if(&mut self, cond: &Node, then_branch: &Node, else_branch: Option<&Node>) {
        let else_label = self.next_label("else");
        let end_label = self.next_label("end_if");

        self.generate_expression(cond);
        self.emit("    test rax, rax");
        self.emit(format!("    jz {else_label}"));

        self.generate_statement(then_branch);
        self.emit(format!("    jmp {end_label}"));

        self.emit(format!("{else_label}:"));
        if let Some(else_branch) = else_branch {
            self.generate_statement(else_branch);
        }
        self.emit(format!("{end_label}:"));
    }

    fn generate_while(&mut self, cond: &Node, body: &Node) {
        let start_label = self.next_label("while_start");
        let end_label = self.next_label("while_end");

        self.emit(format!("{start_label}:"));
        self.generate_expression(cond);
        self.emit("    test rax, rax");
        self.emit(format!("    jz {end_label}"));

        self.generate_statement(body);
        self.emit(format!("    jmp {start_label}"));
        self.emit(format!("{end_label}:"));
    }

    /// Not present in the grounding source (it has no `do`/`while` AST
    /// node); modeled on [`Generator::generate_while`] with the test moved
    /// to the end of the loop body.
    fn generate_do_while(&mut self, cond: &Node, body: &Node) {
        let start_label = self.next_label("do_while_start");
        let end_label = self.next_label("do_while_end");

        self.emit(format!("{start_label}:"));
        self.generate_statement(body);
        self.generate_expression(cond);
        self.emit("    test rax, rax");
        self.emit(format!("    jnz {start_label}"));
        self.emit(format!("{end_label}:"));
    }

    fn generate_for(&mut self, init: Option<&Node>, condition: Option<&Node>, update: Option<&Node>, body: &Node) {
        let start_label = self.next_label("for_start");
        let end_label = self.next_label("for_end");
        let continue_label = self.next_label("for_continue");

        if let Some(init) = init {
            self.generate_statement(init);
        }

        self.emit(format!("{start_label}:"));
        if let Some(condition) = condition {
            self.generate_expression(condition);
            self.emit("    test rax, rax");
            self.emit(format!("    jz {end_label}"));
        }

        self.generate_statement(body);

        self.emit(format!("{continue_label}:"));
        if let Some(update) = update {
            self.generate_expression(update);
        }

        self.emit(format!("    jmp {start_label}"));
        self.emit(format!("{end_label}:"));
    }

    fn generate_switch(&mut self, expr: &Node, cases: &[SwitchCase], default: Option<&[Node]>) {
        let end_label = self.next_label("switch_end");

        self.generate_expression(expr);
        self.emit("    push rax    ; Save switch value");

        let default_label = default.map(|_| self.next_label("default"));
        let case_labels: Vec<String> = cases.iter().map(|_| self.next_label("case")).collect();

        for (i, case) in cases.iter().enumerate() {
            self.emit(format!("{}:", case_labels[i]));
            self.emit("    pop rax     ; Restore switch value");
            self.emit("    push rax    ; Keep switch value");
            self.generate_expression(&case.value);
            self.emit("    mov rbx, rax");
            self.emit("    pop rax");
            self.emit("    push rax");
            self.emit("    cmp rax, rbx");
            let miss_target = case_labels
                .get(i + 1)
                .cloned()
                .or_else(|| default_label.clone())
                .unwrap_or_else(|| end_label.clone());
            self.emit(format!("    jne {miss_target}"));

            for stmt in &case.statements {
                self.generate_statement(stmt);
            }
        }

        if let (Some(default_label), Some(default_stmts)) = (&default_label, default) {
            self.emit(format!("{default_label}:"));
            for stmt in default_stmts {
                self.generate_statement(stmt);
            }
        }

        self.emit("    pop rax     ; Clean up switch value");
        self.emit(format!("{end_label}:"));
    }

    /// Not present in the grounding source; modeled on
    /// [`Generator::generate_switch`]'s subject-reload-and-compare shape,
    /// adapted to `match`'s scalar pattern/action arms instead of
    /// statement-list cases.
    fn generate_match(&mut self, expr: &Node, cases: &[MatchCase], default: Option<&Node>) {
        let end_label = self.next_label("match_end");

        self.generate_expression(expr);
        self.emit("    push rax    ; Save match value");

        for case in cases {
            self.emit("    pop rax     ; Restore match value");
            self.emit("    push rax    ; Keep match value");
            self.generate_expression(&case.pattern);
            self.emit("    mov rbx, rax");
            self.emit("    pop rax");
            self.emit("    push rax");
            self.emit("    cmp rax, rbx");
            let next_arm = self.next_label("next_arm");
            self.emit(format!("    jne {next_arm}"));
            self.emit("    pop rax     ; Clean up match value");
            self.generate_statement(&case.action);
            self.emit(format!("    jmp {end_label}"));
            self.emit(format!("{next_arm}:"));
        }

        self.emit("    pop rax     ; Clean up match value");
        if let Some(default) = default {
            self.generate_statement(default);
        }
        self.emit(format!("{end_label}:"));
    }

    fn generate_try(&mut self, try_block: &[Node], catch_blocks: &[CatchBlock], finally_block: Option<&[Node]>) {
        let catch_label = self.next_label("catch");
        let end_label = self.next_label("try_end");

        self.emit("    ; Try block");
        for stmt in try_block {
            self.generate_statement(stmt);
        }
        self.emit(format!("    jmp {end_label}"));

        self.emit(format!("{catch_label}:"));
        for catch in catch_blocks {
            for stmt in &catch.body {
                self.generate_statement(stmt);
            }
        }

        self.emit(format!("{end_label}:"));
        if let Some(finally_block) = finally_block {
            for stmt in finally_block {
                self.generate_statement(stmt);
            }
        }
    }
}
