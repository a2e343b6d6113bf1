use crate::error::TourError;
use std::io::Write;
use tour_domain::ArithmeticExpression;

pub(super) fn run<W: Write>(out: &mut W) -> Result<(), TourError> {
    let five = ArithmeticExpression::Number(5);
    let four = ArithmeticExpression::Number(4);
    let sum = ArithmeticExpression::addition(five, four);
    let product = ArithmeticExpression::multiplication(sum, ArithmeticExpression::Number(2));

    let value = product.evaluate().ok_or("arithmetic overflow while evaluating the expression")?;
    writeln!(out, "{product} = {value}")?;

    Ok(())
}
