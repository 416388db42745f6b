use crate::app::blocks::bracketed;
use crate::core::{Context, Object, Value};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Builds the demo person.
///
/// `introduce` reads the receiver it is called on. `get_hobbies` captured the
/// `person` binding itself when it was defined, so it keeps answering for
/// that object no matter which receiver invokes it.
pub fn build_person() -> Rc<RefCell<Object>> {
    let person = Rc::new(RefCell::new(Object::with_entries([
        ("name", Value::from("John Doe")),
        ("age", Value::Int(30)),
        ("city", Value::from("New York")),
        ("hobbies", Value::from(vec!["reading", "swimming", "coding"])),
    ])));

    let outer = Rc::downgrade(&person);
    {
        let mut object = person.borrow_mut();
        object.define_method("introduce", |this| {
            Value::from(format!(
                "Hi, I'm {}, {} years old, from {}",
                this.get_or_undefined("name"),
                this.get_or_undefined("age"),
                this.get_or_undefined("city")
            ))
        });
        object.define_bound("get_hobbies", move || match outer.upgrade() {
            Some(person) => {
                let hobbies = person.borrow().get_or_undefined("hobbies");
                hobbies
            }
            None => Value::Undefined,
        });
    }

    person
}

pub fn visitor() -> Object {
    Object::with_entries([
        ("name", Value::from("Jane Roe")),
        ("age", Value::Int(25)),
        ("city", Value::from("Boston")),
        ("hobbies", Value::from(vec!["chess"])),
    ])
}

fn hobby_list(value: &Value) -> String {
    match value.as_list() {
        Some(items) => bracketed(items),
        None => bracketed(&[value]),
    }
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let person = build_person();

    let (introduction, hobbies) = {
        let object = person.borrow();
        (object.call("introduce")?, object.call("get_hobbies")?)
    };
    ctx.log(introduction.to_string());
    ctx.log(format!("Hobbies: {}", hobby_list(&hobbies)));

    // 同一成員借給另一個接收者呼叫
    let other = visitor();
    let (borrowed_intro, borrowed_hobbies) = {
        let object = person.borrow();
        (
            object.call_on("introduce", &other)?,
            object.call_on("get_hobbies", &other)?,
        )
    };
    ctx.log(format!("Method on another receiver: {}", borrowed_intro));
    ctx.log(format!(
        "Bound closure on another receiver: {}",
        hobby_list(&borrowed_hobbies)
    ));

    {
        let mut object = person.borrow_mut();
        object.set("email", "john@example.com");
        object.set("age", 31i64);
        object.remove("city");
    }

    ctx.log("After modifications:");
    let lines: Vec<String> = person
        .borrow()
        .data_entries()
        .into_iter()
        .map(|(key, value)| format!("  {}: {}", key, value))
        .collect();
    for line in lines {
        ctx.log(line);
    }

    let car = Object::with_entries([
        ("brand", Value::from("Toyota")),
        ("model", Value::from("Camry")),
        ("year", Value::Int(2020)),
    ]);
    ctx.log(format!("Car keys: {}", bracketed(&car.keys())));
    ctx.log(format!("Car values: {}", bracketed(&car.values())));
    ctx.log("Car entries:");
    for (key, value) in car.data_entries() {
        ctx.log(format!("  {}: {}", key, value));
    }

    Ok(())
}
