use optval_core::{absent, present, Optional};

#[derive(Debug)]
struct A {
    x: i32,
}

#[derive(Debug)]
struct B {
    #[allow(dead_code)]
    y: String,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().filter_or("RUST_LOG", "warn"));

    for line in walkthrough() {
        println!("{}", line);
    }
}

/// Runs the usage walkthrough and returns the lines it prints.
fn walkthrough() -> Vec<String> {
    let mut lines = Vec::new();

    let a = present(A { x: 1 });
    log::debug!("constructed {:?}", a);
    lines.push(format!("{} {}", a.is_present(), a.is_absent()));

    let b: Optional<A> = absent();
    log::debug!("constructed {:?}", b);
    lines.push(format!("{} {}", b.is_present(), b.is_absent()));

    let x = b.unwrap_or(A { x: 2 });
    log::debug!("fell back to {:?}", x);
    lines.push(format!("{:?}", x));

    let c = a.map(|t| B { y: t.x.to_string() });
    log::debug!("mapped to {:?}", c);
    lines.push(format!("{:?}", c));

    lines
}

#[cfg(test)]
mod tests {
    use super::walkthrough;

    #[test]
    fn test_walkthrough_output() {
        assert_eq!(
            walkthrough(),
            vec![
                "true false",
                "false true",
                "A { x: 2 }",
                "Present(B { y: \"1\" })",
            ]
        );
    }
}
