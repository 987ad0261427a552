use crate::mach::Runtime;


fn run(runtime: &mut Runtime) -> String {
    run_steps(runtime, 5000)
}

fn run_steps(runtime: &mut Runtime, steps: usize) -> String {
    let mut s = String::new();
    for _ in 0..steps {
        match runtime.step() {
            Ok(Some(line)) => {
                for (category, text) in runtime.messages().clone().drain() {
                    s.push_str(&format!("{}: {}\n", category, text));
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

fn load(code: &str) -> Runtime {
    let mut r = Runtime::default();
    r.load(code).unwrap();
    r
}
