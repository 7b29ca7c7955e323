//! New-bill form page.

use crate::core::bill::ExpenseType;

/// Form markup; the receipt picker is labelled `Justificatif`.
#[must_use]
pub fn render() -> String {
    let options: String = ExpenseType::ALL
        .iter()
        .map(|expense_type| format!("<option>{expense_type}</option>"))
        .collect();

    format!(
        r#"<div class="content-header"><div class="content-title">Envoyer une note de frais</div></div><div class="form-newbill-container content-inner"><form data-testid="form-new-bill"><label for="expense-type" class="bold-label">Type de dépense</label><select required class="form-control blue-border" data-testid="expense-type">{options}</select><label for="expense-name" class="bold-label">Nom de la dépense</label><input type="text" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres" /><label for="datepicker" class="bold-label">Date</label><input required type="date" class="form-control blue-border" data-testid="datepicker" /><label for="amount" class="bold-label">Montant TTC </label><input required type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348"/><label for="vat" class="bold-label">TVA</label><input type="number" class="form-control blue-border" data-testid="vat" placeholder="70" /><input type="number" class="form-control blue-border" data-testid="pct" placeholder="20" /><label for="commentary" class="bold-label">Commentaire</label><textarea class="form-control blue-border" data-testid="commentary" rows="3"></textarea><label for="file" class="bold-label">Justificatif</label><input id="file" required type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file" /><button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button></form></div>"#
    )
}
