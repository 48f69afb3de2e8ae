// UI layer: the interactive menu and the four operation flows, built on
// `dialoguer`. The functions are small and synchronous to keep the flow
// easy to follow.
//
// Every prompt validates its input and re-issues itself on bad input —
// there is no retry limit. Rule violations (negative price, overselling,
// unknown id) come back from the `inventory` module as typed errors and
// are printed as one-line messages before returning to the menu.

use crate::inventory::{format_currency, Inventory};
use anyhow::Result;
use dialoguer::Input;
use rust_decimal::Decimal;

/// Main interactive menu. Receives the session's `Inventory` and runs the
/// numbered menu loop until the operator chooses "Exit".
///
/// The only error that can escape is a terminal I/O failure from the
/// prompt library; every domain-level failure is handled in place.
pub fn main_menu(inventory: &mut Inventory) -> Result<()> {
    loop {
        println!();
        println!("=== Inventory Management System ===");
        println!("1) Add product");
        println!("2) Update stock (sell/restock)");
        println!("3) View all products");
        println!("4) Remove product");
        println!("5) Exit");
        println!();

        match prompt_int("Choose an option (1-5)")? {
            1 => add_product(inventory)?,
            2 => update_stock(inventory)?,
            3 => display_products(inventory),
            4 => remove_product(inventory)?,
            5 => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid option. Pick 1-5."),
        }
    }
    Ok(())
}

/// Collect name, price and stock, then hand them to the inventory. A
/// rejected add prints the reason and does not consume an id.
fn add_product(inventory: &mut Inventory) -> Result<()> {
    println!();
    println!("--- Add Product ---");

    let name = prompt_non_empty("Name")?;
    let price = prompt_decimal("Price")?;
    let stock = prompt_int("Stock quantity")?;

    match inventory.add(&name, price, stock) {
        Ok(id) => println!("Added product ID {}.", id),
        Err(e) => println!("{} Product not added.", e),
    }
    Ok(())
}

/// Sell or restock one product. The product is selected by id first so
/// the operator sees its current stock before picking an action.
fn update_stock(inventory: &mut Inventory) -> Result<()> {
    println!();
    println!("--- Update Stock ---");

    if inventory.is_empty() {
        println!("No products yet.");
        return Ok(());
    }

    let id = prompt_int("Enter product ID")?;
    let (name, stock) = match inventory.get(id) {
        Some(p) => (p.name.clone(), p.stock),
        None => {
            println!("Product not found.");
            return Ok(());
        }
    };

    println!("Selected: {} (Stock: {})", name, stock);
    println!("1) Sell (decrease stock)");
    println!("2) Restock (increase stock)");

    match prompt_int("Choose 1 or 2")? {
        1 => {
            let qty = prompt_int("Quantity sold")?;
            match inventory.sell(id, qty) {
                Ok(new_stock) => println!("Sold {}. New stock: {}", qty, new_stock),
                Err(e) => println!("{}", e),
            }
        }
        2 => {
            let qty = prompt_int("Quantity restocked")?;
            match inventory.restock(id, qty) {
                Ok(new_stock) => println!("Restocked {}. New stock: {}", qty, new_stock),
                Err(e) => println!("{}", e),
            }
        }
        _ => println!("Invalid action."),
    }
    Ok(())
}

fn remove_product(inventory: &mut Inventory) -> Result<()> {
    println!();
    println!("--- Remove Product ---");

    if inventory.is_empty() {
        println!("No products to remove.");
        return Ok(());
    }

    let id = prompt_int("Enter product ID to remove")?;
    match inventory.remove(id) {
        Ok(removed) => println!("Removed product ID {}.", removed),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

/// Print every product, one line each, in insertion order. Read-only.
fn display_products(inventory: &Inventory) {
    println!();
    println!("--- All Products ---");

    if inventory.is_empty() {
        println!("No products yet.");
        return;
    }

    for p in inventory.iter() {
        println!(
            "ID: {} | Name: {} | Price: {} | Stock: {}",
            p.id,
            p.name,
            format_currency(p.price),
            p.stock
        );
    }
}

/// Prompt until the operator types something non-empty after trimming,
/// and return the trimmed text.
fn prompt_non_empty(prompt: &str) -> Result<String> {
    let line: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|line: &String| -> Result<(), &str> {
            if line.trim().is_empty() {
                Err("Value cannot be empty.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(line.trim().to_string())
}

/// Prompt until the line parses as a whole number. Negative values are
/// accepted here; range rules belong to the operation using the value.
fn prompt_int(prompt: &str) -> Result<i64> {
    let line: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|line: &String| -> Result<(), &str> {
            match line.trim().parse::<i64>() {
                Ok(_) => Ok(()),
                Err(_) => Err("Enter a valid whole number."),
            }
        })
        .interact_text()?;
    Ok(line.trim().parse::<i64>()?)
}

/// Prompt until the line parses as a decimal number.
fn prompt_decimal(prompt: &str) -> Result<Decimal> {
    let line: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|line: &String| -> Result<(), &str> {
            match line.trim().parse::<Decimal>() {
                Ok(_) => Ok(()),
                Err(_) => Err("Enter a valid decimal number."),
            }
        })
        .interact_text()?;
    Ok(line.trim().parse::<Decimal>()?)
}
