//! Built-in example programs, carried over from the ValC playground's
//! tutorial collection.

pub const ALL: &[(&str, &str)] = &[
    ("hello", HELLO),
    ("score", SCORE),
    ("countdown", COUNTDOWN),
    ("greet", GREET),
];

pub fn find(name: &str) -> Option<&'static str> {
    ALL.iter().find(|(n, _)| *n == name).map(|&(_, text)| text)
}

const HELLO: &str = "\
I AM BATMAN name
I'M JUST YOUR HUCKLEBERRY name \"Val\"
TELL ME MORE name \" Kilmer\" fullname
SAY WHEN fullname
";

const SCORE: &str = "\
I AM BATMAN x
I'M JUST YOUR HUCKLEBERRY x 3
I AM BATMAN y
I'M JUST YOUR HUCKLEBERRY y 4
WHAT'S THE SCORE x + y sum
SAY WHEN sum
";

const COUNTDOWN: &str = "\
I AM BATMAN n
I'M JUST YOUR HUCKLEBERRY n 3
YOU CAN BE MY WINGMAN ANYTIME n
SAY WHEN n
JUST KISS THE BRIDE n
BULLSEYE
SAY WHEN \"liftoff\"
";

const GREET: &str = "\
REMEMBER WHO YOU ARE greet
SAY WHEN \"Hello from greet!\"
FORGET ABOUT IT
CALL ME greet
SAY WHEN \"back in the main event\"
";
