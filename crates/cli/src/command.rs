//! Line commands understood by the driver.

/// Usage text shown for malformed input.
pub const USAGE: &str = "commands:
  order <product> <quantity> <customer name...>
  ship <product> [express]
  status
  products
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Order {
        product: String,
        quantity: i64,
        customer_name: String,
    },
    Ship {
        product: String,
        express: bool,
    },
    Status,
    Products,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "order" => {
            let product = words.next().ok_or("order: missing product")?;
            let quantity = words
                .next()
                .ok_or("order: missing quantity")?
                .parse::<i64>()
                .map_err(|e| format!("order: invalid quantity: {e}"))?;
            let customer_name = words.collect::<Vec<_>>().join(" ");
            Command::Order {
                product: product.to_string(),
                quantity,
                customer_name,
            }
        }
        "ship" => {
            let product = words.next().ok_or("ship: missing product")?;
            let express = match words.next() {
                None => false,
                Some(flag) if flag.eq_ignore_ascii_case("express") => true,
                Some(other) => return Err(format!("ship: unexpected argument `{other}`")),
            };
            Command::Ship {
                product: product.to_string(),
                express,
            }
        }
        "status" => Command::Status,
        "products" => Command::Products,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`")),
    };

    Ok(Some(command))
}
