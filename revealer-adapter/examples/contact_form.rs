// Example: the simulated contact-form flow.
use revealer_adapter::{ContactForm, sanitize};

fn main() {
    let mut form = ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "<b>Hi!</b>".into(),
    };

    match form.validate() {
        Ok(clean) => println!("message as rendered: {}", clean.message),
        Err(err) => println!("rejected: {err}"),
    }

    match form.submit() {
        Ok(toast) => println!("toast: {}", toast.message()),
        Err(err) => println!("toast: {}", err.toast().message()),
    }

    println!("escaped: {}", sanitize("Fish & <Chips>"));
}
