use sformat_utils::{Arg, BoundedString, Policy, ctfe::format::format_const, format_with};

struct Student {
    no: i32,
    name: &'static str,
    height: f64,
}

const STUDENTS: [Student; 2] = [
    Student {
        no: 1,
        name: "Alice",
        height: 161.75,
    },
    Student {
        no: 2,
        name: "Bob",
        height: 176.1,
    },
];

const BANNER: BoundedString<32> = format_const("{}, format!", &[Arg::Text("Hello")]);

pub fn main_inner() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("{BANNER}");

    let mut report = String::new();

    for student in &STUDENTS {
        let line = format_with(
            Policy::Strict,
            "Student #{} : {}, height = {}cm\n",
            &[
                Arg::from(student.no),
                Arg::from(student.name),
                Arg::from(student.height),
            ],
        )?;

        log::debug!("Rendered {} byte(s) for student #{}.", line.len(), student.no);
        report.push_str(&line);
    }

    print!("{report}");

    Ok(())
}
