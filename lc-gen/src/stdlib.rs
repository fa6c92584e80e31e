//! Standard-library catalogue (§4.7): the static map from builtin name to
//! `{category, params, return}` the generator consults to decide how to
//! lower a call. Only `category` and the name itself are used downstream —
//! `params`/`return` are carried for completeness and future type-checking,
//! not consulted by this generator.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Io,
    File,
    String,
    Math,
    Memory,
    System,
    Convert,
    Collection,
    Gui,
}

#[derive(Debug, Clone)]
pub struct BuiltinInfo {
    pub category: Category,
    pub params: &'static [&'static str],
    pub return_type: &'static str,
}

pub struct StandardLibrary {
    functions: FxHashMap<&'static str, BuiltinInfo>,
}

macro_rules! builtin {
    ($map:expr, $name:literal, $cat:expr, [$($p:literal),*], $ret:literal) => {
        $map.insert($name, BuiltinInfo { category: $cat, params: &[$($p),*], return_type: $ret });
    };
}

impl StandardLibrary {
    pub fn new() -> Self {
        use Category::*;
        let mut functions = FxHashMap::default();

        builtin!(functions, "print", Io, ["value"], "void");
        builtin!(functions, "println", Io, ["value"], "void");
        builtin!(functions, "input", Io, ["prompt"], "string");
        builtin!(functions, "printf", Io, ["format", "..."], "void");
        builtin!(functions, "scanf", Io, ["format", "..."], "int");

        builtin!(functions, "open", File, ["filename", "mode"], "file");
        builtin!(functions, "close", File, ["file"], "void");
        builtin!(functions, "read", File, ["file"], "string");
        builtin!(functions, "write", File, ["file", "data"], "void");
        builtin!(functions, "readline", File, ["file"], "string");
        builtin!(functions, "writeline", File, ["file", "line"], "void");
        builtin!(functions, "exists", File, ["filename"], "bool");
        builtin!(functions, "delete", File, ["filename"], "bool");
        builtin!(functions, "copy", File, ["src", "dest"], "bool");
        builtin!(functions, "move", File, ["src", "dest"], "bool");
        builtin!(functions, "size", File, ["filename"], "int");

        builtin!(functions, "strlen", String, ["str"], "int");
        builtin!(functions, "length", String, ["str"], "int");
        builtin!(functions, "strcmp", String, ["str1", "str2"], "int");
        builtin!(functions, "strcpy", String, ["dest", "src"], "string");
        builtin!(functions, "strcat", String, ["str1", "str2"], "string");
        builtin!(functions, "substr", String, ["str", "start", "len"], "string");
        builtin!(functions, "split", String, ["str", "delimiter"], "list");
        builtin!(functions, "join", String, ["list", "separator"], "string");
        builtin!(functions, "trim", String, ["str"], "string");
        builtin!(functions, "upper", String, ["str"], "string");
        builtin!(functions, "lower", String, ["str"], "string");
        builtin!(functions, "replace", String, ["str", "old", "new"], "string");
        builtin!(functions, "contains", String, ["str", "substr"], "bool");
        builtin!(functions, "startswith", String, ["str", "prefix"], "bool");
        builtin!(functions, "endswith", String, ["str", "suffix"], "bool");

        builtin!(functions, "abs", Math, ["value"], "number");
        builtin!(functions, "min", Math, ["a", "b"], "number");
        builtin!(functions, "max", Math, ["a", "b"], "number");
        builtin!(functions, "pow", Math, ["base", "exp"], "number");
        builtin!(functions, "sqrt", Math, ["value"], "float");
        builtin!(functions, "floor", Math, ["value"], "int");
        builtin!(functions, "ceil", Math, ["value"], "int");
        builtin!(functions, "round", Math, ["value"], "int");
        builtin!(functions, "sin", Math, ["angle"], "float");
        builtin!(functions, "cos", Math, ["angle"], "float");
        builtin!(functions, "tan", Math, ["angle"], "float");
        builtin!(functions, "log", Math, ["value"], "float");
        builtin!(functions, "exp", Math, ["value"], "float");
        builtin!(functions, "random", Math, [], "float");
        builtin!(functions, "randint", Math, ["min", "max"], "int");

        builtin!(functions, "malloc", Memory, ["size"], "pointer");
        builtin!(functions, "free", Memory, ["ptr"], "void");
        builtin!(functions, "memcpy", Memory, ["dest", "src", "size"], "pointer");
        builtin!(functions, "memset", Memory, ["ptr", "value", "size"], "pointer");

        builtin!(functions, "exit", System, ["code"], "void");
        builtin!(functions, "system", System, ["command"], "int");
        builtin!(functions, "sleep", System, ["seconds"], "void");
        builtin!(functions, "time", System, [], "int");
        builtin!(functions, "getenv", System, ["name"], "string");
        builtin!(functions, "setenv", System, ["name", "value"], "bool");

        builtin!(functions, "tostr", Convert, ["value"], "string");
        builtin!(functions, "toint", Convert, ["value"], "int");
        builtin!(functions, "tofloat", Convert, ["value"], "float");
        builtin!(functions, "tobool", Convert, ["value"], "bool");
        builtin!(functions, "typeof", Convert, ["value"], "string");

        builtin!(functions, "len", Collection, ["collection"], "int");
        builtin!(functions, "empty", Collection, ["collection"], "bool");
        builtin!(functions, "clear", Collection, ["collection"], "void");
        builtin!(functions, "sort", Collection, ["collection"], "void");
        builtin!(functions, "reverse", Collection, ["collection"], "void");
        builtin!(functions, "map", Collection, ["collection", "function"], "list");
        builtin!(functions, "filter", Collection, ["collection", "predicate"], "list");
        builtin!(functions, "reduce", Collection, ["collection", "function", "initial"], "any");

        builtin!(functions, "msgbox", Gui, ["message", "title"], "int");
        builtin!(functions, "messagebox", Gui, ["message", "title", "type"], "int");
        builtin!(functions, "inputbox", Gui, ["prompt", "title"], "string");
        builtin!(functions, "opendialog", Gui, ["title", "filter"], "string");
        builtin!(functions, "savedialog", Gui, ["title", "filter"], "string");
        builtin!(functions, "colordialog", Gui, [], "int");
        builtin!(functions, "fontdialog", Gui, [], "string");
        builtin!(functions, "folderdialog", Gui, ["title"], "string");
        builtin!(functions, "showwindow", Gui, ["title", "width", "height"], "int");
        builtin!(functions, "closewindow", Gui, ["window"], "void");
        builtin!(functions, "getclipboard", Gui, [], "string");
        builtin!(functions, "setclipboard", Gui, ["text"], "void");
        builtin!(functions, "beep", Gui, ["frequency", "duration"], "void");
        builtin!(functions, "alert", Gui, ["message"], "void");
        builtin!(functions, "confirm", Gui, ["message"], "bool");
        builtin!(functions, "prompt", Gui, ["message", "default"], "string");

        StandardLibrary { functions }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn info(&self, name: &str) -> Option<&BuiltinInfo> {
        self.functions.get(name)
    }
}

impl Default for StandardLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_wrapper_named_in_the_design_is_a_recognized_builtin() {
        let stdlib = StandardLibrary::new();
        for name in [
            "print", "println", "input", "open", "close", "read", "write", "strlen", "length", "strcmp", "strcpy",
            "strcat", "abs", "min", "max", "malloc", "free", "exit", "system", "time", "toint", "tofloat", "msgbox",
            "alert", "confirm", "beep", "getclipboard",
        ] {
            assert!(stdlib.is_builtin(name), "{name} should be a recognized builtin");
        }
    }

    #[test]
    fn unknown_name_is_not_a_builtin() {
        let stdlib = StandardLibrary::new();
        assert!(!stdlib.is_builtin("not_a_real_function"));
    }

    #[test]
    fn category_is_retrievable_for_lowering_decisions() {
        let stdlib = StandardLibrary::new();
        assert_eq!(stdlib.info("sqrt").unwrap().category, Category::Math);
        assert_eq!(stdlib.info("msgbox").unwrap().category, Category::Gui);
    }
}
