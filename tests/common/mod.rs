use gsharp::lang::Category;
use gsharp::mach::Runtime;

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, steps: usize) -> String {
    let mut s = String::new();
    for _ in 0..steps {
        match runtime.step() {
            Ok(Some(line)) => {
                for category in Category::ALL.iter() {
                    if let Some(text) = runtime.take_message(*category) {
                        s.push_str(&format!("{}: {}\n", category, text));
                    }
                }
                if !line.is_empty() {
                    s.push_str(&format!("{}\n", line));
                }
            }
            Ok(None) => return s,
            Err(error) => {
                s.push_str(&format!("{}\n", error));
                return s;
            }
        }
    }
    s.push_str(&format!("\n{} Execution steps exceeded.\n", steps));
    s
}

pub fn run(code: &str) -> String {
    let mut runtime = Runtime::default();
    match runtime.load(code) {
        Ok(()) => exec(&mut runtime),
        Err(error) => format!("{}\n", error),
    }
}

pub fn translate(runtime: &mut Runtime, line: &str) -> String {
    match runtime.translate_line(line) {
        Ok(s) => s,
        Err(error) => error.to_string(),
    }
}
